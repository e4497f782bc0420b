//! Microinverter trigger/response wire protocol
//!
//! Request (trigger) frame:
//!   Prefix(2) = 10 77 | BaseId(ASCII, N) | Padding(12) = 00.. | Trailer(2) = e3 16
//!
//! Response frame:
//!   Opening(22) | PanelSegment(W) x panels | Closing(2)
//!
//! Panel segment:
//!   PanelId(ASCII, N) | FwMajor(1) | FwMinor(1) | Data(10)
//!
//! Data block, five 16-bit fields, all little-endian:
//!   Temperature(/100) | AcPower(/100) | Unknown1 | Unknown2 | DcVoltage(/100)

use bytes::{Buf, BufMut, BytesMut};
use std::fmt;
use tracing::{debug, warn};

use super::panel::PanelId;
use crate::error::{InverterError, Result};

/// Trigger frame prefix
pub const TRIGGER_PREFIX: [u8; 2] = [0x10, 0x77];
/// Zero bytes between the base identifier and the trailer
pub const TRIGGER_PADDING_LEN: usize = 12;
/// Trigger frame trailer
pub const TRIGGER_TRAILER: [u8; 2] = [0xe3, 0x16];

/// Response opening segment: 6-byte tag plus the base identifier and filler
pub const OPENING_SEGMENT_LEN: usize = 22;
/// Response closing segment (trailer marker)
pub const CLOSING_SEGMENT_LEN: usize = 2;
/// Smallest response that still holds both framing segments
pub const MIN_RESPONSE_LEN: usize = OPENING_SEGMENT_LEN + CLOSING_SEGMENT_LEN;

/// Firmware major + minor bytes following the identifier
pub const FIRMWARE_LEN: usize = 2;
/// Telemetry data block following the firmware bytes
pub const DATA_BLOCK_LEN: usize = 10;

// Field offsets relative to the start of the data block
const TEMPERATURE_OFFSET: usize = 0;
const AC_POWER_OFFSET: usize = 2;
const UNKNOWN1_OFFSET: usize = 4;
const UNKNOWN2_OFFSET: usize = 6;
const DC_VOLTAGE_OFFSET: usize = 8;

const CENTI: f64 = 100.0;

/// Length of the trigger frame for a given base identifier
pub fn trigger_len(base_id: &PanelId) -> usize {
    TRIGGER_PREFIX.len() + base_id.len() + TRIGGER_PADDING_LEN + TRIGGER_TRAILER.len()
}

/// Build the trigger frame that asks the inverter for a telemetry response
///
/// The identifier digits are sent as raw ASCII, unlike the framing bytes.
pub fn encode_trigger(base_id: &PanelId) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(trigger_len(base_id));
    buf.put_slice(&TRIGGER_PREFIX);
    buf.put_slice(base_id.as_bytes());
    buf.put_bytes(0x00, TRIGGER_PADDING_LEN);
    buf.put_slice(&TRIGGER_TRAILER);

    debug!(base_id = %base_id, "Built trigger frame: {}", hex::encode(&buf));
    buf.to_vec()
}

/// Result of decoding one data-block field
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Decoded(T),
    /// The field lies past the end of the segment
    Unavailable,
}

impl<T> Field<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Decoded(v) => Field::Decoded(f(v)),
            Field::Unavailable => Field::Unavailable,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Decoded(v) => Some(v),
            Field::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Field::Decoded(_))
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Decoded(v) => v.fmt(f),
            Field::Unavailable => write!(f, "N/A"),
        }
    }
}

/// Unscaled 16-bit field whose meaning is not known yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWord {
    /// Little-endian value
    pub value: u16,
    /// The two bytes in wire order, hex encoded
    pub hex: String,
}

impl fmt::Display for RawWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Telemetry decoded from one panel segment
#[derive(Debug, Clone, PartialEq)]
pub struct PanelReading {
    /// 1-based position of the panel in the chain
    pub position: usize,
    /// Identifier bytes as found in the segment
    pub identifier: String,
    pub firmware_major: u8,
    pub firmware_minor: u8,
    /// Degrees Celsius. Scaling not yet verified against hardware.
    pub temperature: Field<f64>,
    /// Watts
    pub ac_power: Field<f64>,
    pub unknown1: Field<RawWord>,
    pub unknown2: Field<RawWord>,
    /// Volts. Scaling not yet verified against hardware.
    pub dc_voltage: Field<f64>,
    /// Raw segment bytes
    pub segment: Vec<u8>,
}

impl PanelReading {
    pub fn firmware(&self) -> String {
        format!("{}/{}", self.firmware_major, self.firmware_minor)
    }

    /// Names of the data-block fields that could not be decoded
    pub fn unavailable_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.temperature.is_available() {
            missing.push("temperature");
        }
        if !self.ac_power.is_available() {
            missing.push("ac_power");
        }
        if !self.unknown1.is_available() {
            missing.push("unknown1");
        }
        if !self.unknown2.is_available() {
            missing.push("unknown2");
        }
        if !self.dc_voltage.is_available() {
            missing.push("dc_voltage");
        }
        missing
    }
}

/// Non-fatal problem found while decoding a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Segment cannot hold the identifier and firmware bytes; it was skipped
    SegmentTooShort {
        position: usize,
        length: usize,
        required: usize,
    },
    /// Segment carries a different identifier than the one requested
    IdentifierMismatch {
        position: usize,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::SegmentTooShort {
                position,
                length,
                required,
            } => write!(
                f,
                "panel {} segment too short: {} bytes (need {})",
                position, length, required
            ),
            DecodeWarning::IdentifierMismatch {
                position,
                expected,
                actual,
            } => write!(
                f,
                "panel {} identifier mismatch: expected {}, got {:?}",
                position, expected, actual
            ),
        }
    }
}

/// A fully segmented response
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedResponse {
    pub opening: Vec<u8>,
    /// May hold fewer readings than requested panels when segments were skipped
    pub readings: Vec<PanelReading>,
    pub closing: Vec<u8>,
    pub warnings: Vec<DecodeWarning>,
}

/// Read a little-endian u16 at `offset`, or `Unavailable` past the end
fn read_u16_le(segment: &[u8], offset: usize) -> Field<u16> {
    match offset
        .checked_add(2)
        .and_then(|end| segment.get(offset..end))
    {
        Some(mut word) => Field::Decoded(word.get_u16_le()),
        None => Field::Unavailable,
    }
}

fn read_scaled(segment: &[u8], offset: usize, scale: f64) -> Field<f64> {
    read_u16_le(segment, offset).map(|raw| raw as f64 / scale)
}

fn read_raw_word(segment: &[u8], offset: usize) -> Field<RawWord> {
    read_u16_le(segment, offset).map(|value| RawWord {
        value,
        hex: hex::encode(value.to_le_bytes()),
    })
}

/// Split a raw response into its segments and decode every panel
///
/// `identifiers` must list the requested panels in chain order; its length
/// determines how the panel block is divided.
pub fn decode_response(raw: &[u8], identifiers: &[PanelId]) -> Result<DecodedResponse> {
    if raw.len() < MIN_RESPONSE_LEN {
        return Err(InverterError::FrameTooShort {
            length: raw.len(),
            minimum: MIN_RESPONSE_LEN,
        });
    }

    let (opening, rest) = raw.split_at(OPENING_SEGMENT_LEN);
    let (panel_block, closing) = rest.split_at(rest.len() - CLOSING_SEGMENT_LEN);

    let panels = identifiers.len();
    if panels == 0 || panel_block.is_empty() || panel_block.len() % panels != 0 {
        return Err(InverterError::MalformedPanelBlock {
            block_length: panel_block.len(),
            panels,
        });
    }
    let segment_width = panel_block.len() / panels;
    if segment_width < identifiers[0].len() + FIRMWARE_LEN + DATA_BLOCK_LEN {
        debug!(
            segment_width,
            "Panel segments are narrower than a full data block; some fields will be unavailable"
        );
    }

    debug!(
        "Panel block: {} bytes, {} bytes per panel",
        panel_block.len(),
        segment_width
    );

    let mut readings = Vec::with_capacity(panels);
    let mut warnings = Vec::new();

    for (index, (expected, segment)) in identifiers
        .iter()
        .zip(panel_block.chunks_exact(segment_width))
        .enumerate()
    {
        let position = index + 1;
        let id_len = expected.len();
        let required = id_len + FIRMWARE_LEN;

        if segment.len() < required {
            warn!(
                panel = position,
                segment_len = segment.len(),
                "Segment too short for panel id and firmware, skipping"
            );
            warnings.push(DecodeWarning::SegmentTooShort {
                position,
                length: segment.len(),
                required,
            });
            continue;
        }

        let identifier = String::from_utf8_lossy(&segment[..id_len]).into_owned();
        if identifier != expected.as_str() {
            warn!(
                panel = position,
                expected = %expected,
                actual = %identifier,
                "Panel id in segment does not match the requested id"
            );
            warnings.push(DecodeWarning::IdentifierMismatch {
                position,
                expected: expected.to_string(),
                actual: identifier.clone(),
            });
        }

        let data = id_len + FIRMWARE_LEN;
        let reading = PanelReading {
            position,
            identifier,
            firmware_major: segment[id_len],
            firmware_minor: segment[id_len + 1],
            temperature: read_scaled(segment, data + TEMPERATURE_OFFSET, CENTI),
            ac_power: read_scaled(segment, data + AC_POWER_OFFSET, CENTI),
            unknown1: read_raw_word(segment, data + UNKNOWN1_OFFSET),
            unknown2: read_raw_word(segment, data + UNKNOWN2_OFFSET),
            dc_voltage: read_scaled(segment, data + DC_VOLTAGE_OFFSET, CENTI),
            segment: segment.to_vec(),
        };

        let missing = reading.unavailable_fields();
        if !missing.is_empty() {
            warn!(
                panel = position,
                segment_len = segment.len(),
                "Not enough data in segment to decode {}",
                missing.join(", ")
            );
        }

        readings.push(reading);
    }

    Ok(DecodedResponse {
        opening: opening.to_vec(),
        readings,
        closing: closing.to_vec(),
        warnings,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::inverter::panel::generate_panel_ids;

    const OPENING_TAG: [u8; 6] = [0x68, 0x00, 0x96, 0x68, 0x10, 0x04];
    const CLOSING: [u8; 2] = [0x8e, 0x16];

    /// Opening segment: tag, ASCII base id, zero filler up to 22 bytes
    pub(crate) fn opening_for(base: &str) -> Vec<u8> {
        let mut opening = OPENING_TAG.to_vec();
        opening.extend_from_slice(base.as_bytes());
        opening.resize(OPENING_SEGMENT_LEN, 0x00);
        opening
    }

    /// Panel segment: ASCII id, firmware, five LE words
    pub(crate) fn segment_for(id: &str, fw: (u8, u8), words: [u16; 5]) -> Vec<u8> {
        let mut segment = id.as_bytes().to_vec();
        segment.push(fw.0);
        segment.push(fw.1);
        for word in words {
            segment.extend_from_slice(&word.to_le_bytes());
        }
        segment
    }

    /// Identifier and firmware bytes with no data block
    fn header_only(id: &str, major: u8, minor: u8) -> Vec<u8> {
        let mut segment = id.as_bytes().to_vec();
        segment.push(major);
        segment.push(minor);
        segment
    }

    pub(crate) fn frame_from(opening: &[u8], segments: &[Vec<u8>]) -> Vec<u8> {
        let mut frame = opening.to_vec();
        for segment in segments {
            frame.extend_from_slice(segment);
        }
        frame.extend_from_slice(&CLOSING);
        frame
    }

    /// Four-panel response for base 30824520, 18-byte segments
    pub(crate) fn sample_response() -> Vec<u8> {
        let segments = vec![
            segment_for("30824520", (0xa3, 0x7a), [0x1062, 0x4f20, 0x00a1, 0x4506, 0x3a55]),
            segment_for("30824521", (0xa3, 0x7a), [0x0fe0, 0x5fb9, 0x00b9, 0x8c06, 0x3aa0]),
            segment_for("30824522", (0xa3, 0x7a), [0x0ff0, 0x5ce9, 0x00e9, 0x3a06, 0x3a10]),
            segment_for("30824523", (0xa3, 0x7a), [0x1004, 0x748a, 0x008a, 0x3307, 0x3a66]),
        ];
        frame_from(&opening_for("30824520"), &segments)
    }

    fn assert_close(field: &Field<f64>, expected: f64) {
        match field {
            Field::Decoded(v) => assert!(
                (v - expected).abs() < 1e-9,
                "expected {}, got {}",
                expected,
                v
            ),
            Field::Unavailable => panic!("expected {}, got Unavailable", expected),
        }
    }

    #[test]
    fn test_encode_trigger_layout() {
        let ids = generate_panel_ids("30824520", 4).unwrap();
        let frame = encode_trigger(&ids[0]);

        assert_eq!(frame.len(), 24);
        assert_eq!(frame.len(), ids[0].len() + 16);
        assert_eq!(&frame[0..2], &[0x10, 0x77]);
        assert_eq!(&frame[2..10], b"30824520");
        assert_eq!(&frame[10..22], &[0u8; 12]);
        assert_eq!(&frame[22..24], &[0xe3, 0x16]);
        assert_eq!(
            hex::encode(&frame),
            "10773330383234353230000000000000000000000000e316"
        );
    }

    #[test]
    fn test_encode_trigger_carries_identifier_unchanged() {
        for base in ["7", "1234", "100000000"] {
            let id = generate_panel_ids(base, 1).unwrap().remove(0);
            let frame = encode_trigger(&id);
            assert_eq!(frame.len(), trigger_len(&id));
            let start = TRIGGER_PREFIX.len();
            let echoed = std::str::from_utf8(&frame[start..start + id.len()]).unwrap();
            assert_eq!(echoed, base);
        }
    }

    #[test]
    fn test_decode_sample_response() {
        let ids = generate_panel_ids("30824520", 4).unwrap();
        let raw = sample_response();
        assert_eq!(raw.len(), 96);

        let decoded = decode_response(&raw, &ids).unwrap();
        assert_eq!(decoded.opening, opening_for("30824520"));
        assert_eq!(decoded.closing, vec![0x8e, 0x16]);
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.readings.len(), 4);

        let identifiers: Vec<&str> = decoded
            .readings
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(
            identifiers,
            vec!["30824520", "30824521", "30824522", "30824523"]
        );

        let first = &decoded.readings[0];
        assert_eq!(first.position, 1);
        assert_eq!(first.firmware(), "163/122");
        // 62 10 -> 0x1062 = 4194
        assert_close(&first.temperature, 41.94);
        // 20 4f -> 0x4f20 = 20256
        assert_close(&first.ac_power, 202.56);
        // 55 3a -> 0x3a55 = 14933
        assert_close(&first.dc_voltage, 149.33);
        assert_eq!(
            first.unknown1,
            Field::Decoded(RawWord {
                value: 0x00a1,
                hex: "a100".to_string()
            })
        );
        assert_eq!(
            first.unknown2,
            Field::Decoded(RawWord {
                value: 0x4506,
                hex: "0645".to_string()
            })
        );
        assert_eq!(first.segment.len(), 18);
        assert!(first.unavailable_fields().is_empty());
    }

    #[test]
    fn test_temperature_bytes_little_endian() {
        let ids = generate_panel_ids("30824520", 1).unwrap();
        let mut segment = b"30824520".to_vec();
        segment.extend_from_slice(&[0x01, 0x02]);
        segment.extend_from_slice(&[0x62, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff]);
        let raw = frame_from(&opening_for("30824520"), &[segment]);

        let decoded = decode_response(&raw, &ids).unwrap();
        let reading = &decoded.readings[0];
        assert_close(&reading.temperature, 41.94);
        assert_close(&reading.ac_power, 0.0);
        assert_close(&reading.dc_voltage, 655.35);
        assert_eq!(reading.firmware_major, 1);
        assert_eq!(reading.firmware_minor, 2);
    }

    #[test]
    fn test_frame_too_short() {
        let ids = generate_panel_ids("30824520", 4).unwrap();
        for len in [0, 1, 23] {
            let raw = vec![0u8; len];
            match decode_response(&raw, &ids) {
                Err(InverterError::FrameTooShort { length, minimum }) => {
                    assert_eq!(length, len);
                    assert_eq!(minimum, 24);
                }
                other => panic!("Expected FrameTooShort, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_frame_with_only_framing_is_malformed() {
        let ids = generate_panel_ids("30824520", 4).unwrap();
        let raw = frame_from(&opening_for("30824520"), &[]);
        assert_eq!(raw.len(), 24);
        assert!(matches!(
            decode_response(&raw, &ids),
            Err(InverterError::MalformedPanelBlock {
                block_length: 0,
                panels: 4
            })
        ));
    }

    #[test]
    fn test_uneven_panel_block_is_malformed() {
        let ids = generate_panel_ids("30824520", 4).unwrap();
        let mut raw = sample_response();
        // One extra byte in the panel block
        raw.insert(30, 0x00);
        match decode_response(&raw, &ids) {
            Err(InverterError::MalformedPanelBlock {
                block_length,
                panels,
            }) => {
                assert_eq!(block_length, 73);
                assert_eq!(panels, 4);
            }
            other => panic!("Expected MalformedPanelBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_no_identifiers_is_malformed() {
        let raw = sample_response();
        assert!(matches!(
            decode_response(&raw, &[]),
            Err(InverterError::MalformedPanelBlock { panels: 0, .. })
        ));
    }

    #[test]
    fn test_segment_without_data_block_reports_unavailable() {
        let ids = generate_panel_ids("30824520", 2).unwrap();
        let segments = vec![
            header_only("30824520", 0x03, 0x04),
            header_only("30824521", 0x05, 0x06),
        ];
        let raw = frame_from(&opening_for("30824520"), &segments);

        let decoded = decode_response(&raw, &ids).unwrap();
        assert_eq!(decoded.readings.len(), 2);
        assert!(decoded.warnings.is_empty());

        let reading = &decoded.readings[1];
        assert_eq!(reading.identifier, "30824521");
        assert_eq!(reading.firmware(), "5/6");
        assert_eq!(reading.temperature, Field::Unavailable);
        assert_eq!(reading.ac_power, Field::Unavailable);
        assert_eq!(reading.unknown1, Field::Unavailable);
        assert_eq!(reading.unknown2, Field::Unavailable);
        assert_eq!(reading.dc_voltage, Field::Unavailable);
        assert_eq!(reading.unavailable_fields().len(), 5);
    }

    #[test]
    fn test_partial_data_block_decodes_leading_fields() {
        let ids = generate_panel_ids("30824520", 1).unwrap();
        // id + fw + 5 data bytes: temperature and ac power fit, unknown1 is cut
        let mut segment = b"30824520".to_vec();
        segment.extend_from_slice(&[0x01, 0x00, 0x10, 0x27, 0x64, 0x00, 0xaa]);
        let raw = frame_from(&opening_for("30824520"), &[segment]);

        let decoded = decode_response(&raw, &ids).unwrap();
        let reading = &decoded.readings[0];
        assert_close(&reading.temperature, 100.0);
        assert_close(&reading.ac_power, 1.0);
        assert_eq!(reading.unknown1, Field::Unavailable);
        assert_eq!(reading.unknown2, Field::Unavailable);
        assert_eq!(reading.dc_voltage, Field::Unavailable);
        assert_eq!(
            reading.unavailable_fields(),
            vec!["unknown1", "unknown2", "dc_voltage"]
        );
    }

    #[test]
    fn test_short_segments_are_skipped() {
        // 4-byte segments cannot hold an 8-byte id plus firmware
        let ids = generate_panel_ids("30824520", 2).unwrap();
        let raw = frame_from(
            &opening_for("30824520"),
            &[vec![0x01, 0x02, 0x03, 0x04], vec![0x05, 0x06, 0x07, 0x08]],
        );

        let decoded = decode_response(&raw, &ids).unwrap();
        assert!(decoded.readings.is_empty());
        assert_eq!(decoded.warnings.len(), 2);
        assert_eq!(
            decoded.warnings[0],
            DecodeWarning::SegmentTooShort {
                position: 1,
                length: 4,
                required: 10
            }
        );
    }

    #[test]
    fn test_wider_identifier_skips_only_its_segment() {
        // Second id is one byte wider than the 10-byte segments allow
        let ids = generate_panel_ids("99999999", 2).unwrap();
        let segments = vec![
            header_only("99999999", 0x01, 0x02),
            header_only("10000000", 0x03, 0x04),
        ];
        let raw = frame_from(&opening_for("99999999"), &segments);

        let decoded = decode_response(&raw, &ids).unwrap();
        assert_eq!(decoded.readings.len(), 1);
        assert_eq!(decoded.readings[0].identifier, "99999999");
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::SegmentTooShort {
                position: 2,
                length: 10,
                required: 11
            }]
        );
    }

    #[test]
    fn test_identifier_mismatch_is_warning() {
        let ids = generate_panel_ids("30824520", 1).unwrap();
        let segment = segment_for("30824599", (1, 2), [100, 200, 0, 0, 300]);
        let raw = frame_from(&opening_for("30824520"), &[segment]);

        let decoded = decode_response(&raw, &ids).unwrap();
        assert_eq!(decoded.readings.len(), 1);
        assert_eq!(decoded.readings[0].identifier, "30824599");
        assert_close(&decoded.readings[0].ac_power, 2.0);
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::IdentifierMismatch {
                position: 1,
                expected: "30824520".to_string(),
                actual: "30824599".to_string(),
            }]
        );
    }

    #[test]
    fn test_extra_segment_bytes_are_ignored() {
        // 24-byte segments: data block followed by 6 trailing bytes
        let ids = generate_panel_ids("30824520", 2).unwrap();
        let segments: Vec<Vec<u8>> = ["30824520", "30824521"]
            .iter()
            .map(|id| {
                let mut s = segment_for(id, (1, 0), [2500, 10000, 1, 2, 3000]);
                s.extend_from_slice(&[0xff; 6]);
                s
            })
            .collect();
        let raw = frame_from(&opening_for("30824520"), &segments);

        let decoded = decode_response(&raw, &ids).unwrap();
        assert_eq!(decoded.readings.len(), 2);
        assert_close(&decoded.readings[1].temperature, 25.0);
        assert_close(&decoded.readings[1].ac_power, 100.0);
        assert_close(&decoded.readings[1].dc_voltage, 30.0);
        assert_eq!(decoded.readings[1].segment.len(), 24);
    }

    #[test]
    fn test_read_u16_le_bounds() {
        let data = [0x34, 0x12, 0x78];
        assert_eq!(read_u16_le(&data, 0), Field::Decoded(0x1234));
        assert_eq!(read_u16_le(&data, 1), Field::Decoded(0x7812));
        assert_eq!(read_u16_le(&data, 2), Field::Unavailable);
        assert_eq!(read_u16_le(&data, usize::MAX), Field::Unavailable);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Decoded(41.94).to_string(), "41.94");
        assert_eq!(Field::<f64>::Unavailable.to_string(), "N/A");
    }
}
