//! Microinverter Simulator
//!
//! Listens for the bridge's trigger frame and answers with synthetic
//! telemetry responses. Useful for testing without hardware.
//!
//! Usage: cargo run --bin inverter-sim [bind_addr] [panel_count] [responses]

use std::env;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{sleep, Duration};

const TRIGGER_PREFIX: [u8; 2] = [0x10, 0x77];
const TRIGGER_TRAILER: [u8; 2] = [0xe3, 0x16];
const TRIGGER_PADDING_LEN: usize = 12;

/// Opening tag seen in captured responses
const OPENING_TAG: [u8; 6] = [0x68, 0x00, 0x96, 0x68, 0x10, 0x04];
const OPENING_LEN: usize = 22;
const CLOSING: [u8; 2] = [0x8e, 0x16];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let bind_addr: SocketAddr = env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:14889".to_string())
        .parse()?;
    let panel_count: u64 = env::args()
        .nth(2)
        .unwrap_or_else(|| "4".to_string())
        .parse()?;
    let responses: u32 = env::args()
        .nth(3)
        .unwrap_or_else(|| "3".to_string())
        .parse()?;

    println!("☀️  Microinverter Simulator");
    println!("  Listening on: {}", bind_addr);
    println!("  Panels: {}", panel_count);
    println!("  Responses per connection: {}", responses);
    println!();

    let listener = TcpListener::bind(bind_addr).await?;

    loop {
        let (socket, peer) = listener.accept().await?;
        println!("🔌 Connection from {}", peer);
        tokio::spawn(async move {
            if let Err(e) = serve(socket, panel_count, responses).await {
                println!("   ❌ {}: {}", peer, e);
            }
            println!("👋 {} done", peer);
        });
    }
}

async fn serve(mut socket: TcpStream, panel_count: u64, responses: u32) -> anyhow::Result<()> {
    let base_id = read_trigger(&mut socket).await?;
    println!("   📨 Trigger for base id {}", base_id);

    let base: u64 = base_id.parse()?;

    for cycle in 0..responses {
        let frame = build_response(&base_id, base, panel_count, cycle);
        socket.write_all(&frame).await?;
        println!("   📤 Sent {} byte response (cycle {})", frame.len(), cycle + 1);
        sleep(Duration::from_secs(2)).await;
    }

    socket.shutdown().await?;
    Ok(())
}

/// Read one trigger frame and return the base id it carries
async fn read_trigger(socket: &mut TcpStream) -> anyhow::Result<String> {
    let mut frame = Vec::new();
    let mut buf = [0u8; 64];

    while !frame.ends_with(&TRIGGER_TRAILER) {
        let len = socket.read(&mut buf).await?;
        if len == 0 {
            anyhow::bail!("connection closed before a full trigger frame");
        }
        frame.extend_from_slice(&buf[..len]);
        if frame.len() > 256 {
            anyhow::bail!("no trigger trailer within {} bytes", frame.len());
        }
    }

    let min_len = TRIGGER_PREFIX.len() + TRIGGER_PADDING_LEN + TRIGGER_TRAILER.len();
    if frame.len() <= min_len || !frame.starts_with(&TRIGGER_PREFIX) {
        anyhow::bail!("malformed trigger frame: {}", hex::encode(&frame));
    }

    let id_end = frame.len() - TRIGGER_TRAILER.len() - TRIGGER_PADDING_LEN;
    let base_id = std::str::from_utf8(&frame[TRIGGER_PREFIX.len()..id_end])?.to_string();
    Ok(base_id)
}

/// Build a response with one 18-byte segment per panel
fn build_response(base_id: &str, base: u64, panel_count: u64, cycle: u32) -> Vec<u8> {
    let mut frame = OPENING_TAG.to_vec();
    frame.extend_from_slice(base_id.as_bytes());
    frame.resize(OPENING_LEN, 0x00);

    for i in 0..panel_count {
        let id = (base + i).to_string();
        let drift = (cycle as u16) * 7 + (i as u16) * 13;

        frame.extend_from_slice(id.as_bytes());
        frame.push(0xa3); // firmware major
        frame.push(0x7a); // firmware minor
        frame.extend_from_slice(&(4100u16 + drift).to_le_bytes()); // 41.00 °C
        frame.extend_from_slice(&(20000u16 + drift * 10).to_le_bytes()); // 200.00 W
        frame.extend_from_slice(&0x00a1u16.to_le_bytes());
        frame.extend_from_slice(&0x4506u16.to_le_bytes());
        frame.extend_from_slice(&(3450u16 + drift).to_le_bytes()); // 34.50 V
    }

    frame.extend_from_slice(&CLOSING);
    frame
}
