pub mod panel;
pub mod protocol;

use chrono::{DateTime, Utc};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::InverterConfig;
use crate::error::{InverterError, Result};
use panel::PanelId;
use protocol::DecodedResponse;

/// One decoded response, ready for the reporter
#[derive(Debug, Clone)]
pub struct TelemetryReport {
    pub received_at: DateTime<Utc>,
    /// Size of the raw response chunk
    pub byte_count: usize,
    pub response: DecodedResponse,
}

/// Connect to the microinverter and run one polling session
///
/// Returns the number of responses decoded once the inverter closes the
/// connection. Reconnecting is left to whatever supervises the process.
pub async fn run_session(
    config: &InverterConfig,
    panel_ids: &[PanelId],
    report_tx: mpsc::Sender<TelemetryReport>,
) -> Result<usize> {
    let addr = config.addr();
    info!(
        host = %config.host,
        port = config.port,
        "Attempting connection to microinverter..."
    );

    let timeout = config.connect_timeout();
    let stream = match tokio::time::timeout(timeout, TcpStream::connect(&addr)).await {
        Ok(Ok(stream)) => stream,
        Ok(Err(source)) => return Err(InverterError::Connect { addr, source }),
        Err(_) => return Err(InverterError::ConnectTimeout { addr, timeout }),
    };
    info!(host = %config.host, port = config.port, "Connected to microinverter");

    poll_inverter(stream, panel_ids, config.read_buffer_size, report_tx).await
}

/// Send the trigger frame and decode every chunk the inverter sends back
///
/// Each inbound chunk is treated as one complete response. Chunks that fail
/// to decode are logged and skipped; the session keeps reading.
pub async fn poll_inverter<S>(
    mut stream: S,
    panel_ids: &[PanelId],
    buffer_size: usize,
    report_tx: mpsc::Sender<TelemetryReport>,
) -> Result<usize>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let base_id = panel_ids.first().ok_or_else(|| {
        InverterError::InvalidConfiguration("no panel ids to poll".to_string())
    })?;

    let trigger = protocol::encode_trigger(base_id);
    stream.write_all(&trigger).await?;
    stream.flush().await?;
    info!(
        payload = %String::from_utf8_lossy(&trigger),
        hex = %hex::encode(&trigger),
        "Sent trigger frame"
    );

    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut responses = 0usize;

    loop {
        let len = stream.read(&mut buf).await?;
        if len == 0 {
            info!("Connection ended by microinverter");
            return Ok(responses);
        }

        let chunk = &buf[..len];
        info!(hex = %hex::encode(chunk), "Raw data received ({} bytes)", len);

        match protocol::decode_response(chunk, panel_ids) {
            Ok(response) => {
                responses += 1;
                debug!(
                    "Decoded {} of {} panels",
                    response.readings.len(),
                    panel_ids.len()
                );

                let report = TelemetryReport {
                    received_at: Utc::now(),
                    byte_count: len,
                    response,
                };
                if report_tx.send(report).await.is_err() {
                    warn!("Report channel closed, ending session");
                    return Ok(responses);
                }
            }
            Err(e) => {
                warn!("Failed to decode response: {}", e);
            }
        }
    }
}
