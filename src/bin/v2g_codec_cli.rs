//! A small demo binary exercising [`iso15118_2_exi`]'s two entry points
//! from the command line. Gated behind the `cli` feature so the library
//! itself stays free of `clap`/`serde_json` for embedded callers
//! (`SPEC_FULL.md` §6.2).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iso15118_2_exi::document::{decode_message, encode_message, Message};
use iso15118_2_exi::model::body::Body;
use iso15118_2_exi::model::bounded::BoundedBinary;
use iso15118_2_exi::model::common::{MessageHeader, ResponseCode};
use iso15118_2_exi::model::messages::session::SessionStopRes;

#[derive(Parser, Debug)]
#[command(about = "Encode/decode ISO 15118-2 V2G_Message EXI frames", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Builds and encodes a minimal `SessionStopRes` message, printing the
    /// resulting frame as hex on stdout.
    Encode {
        /// 8-byte session id, hex-encoded.
        #[arg(long, default_value = "0102030405060708")]
        session_id: String,
    },
    /// Decodes a hex-encoded frame and prints a JSON summary.
    Decode {
        /// The frame to decode, hex-encoded.
        hex: String,
    },
}

fn parse_hex(s: &str) -> Result<Vec<u8>> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).context("invalid hex byte"))
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Encode { session_id } => {
            let session_id = parse_hex(&session_id)?;
            let message = Message {
                header: MessageHeader {
                    session_id: BoundedBinary::from_slice(&session_id)
                        .map_err(|e| anyhow::anyhow!("{e}"))?,
                    notification: None,
                    signature: None,
                },
                body: Body::SessionStopRes(SessionStopRes {
                    response_code: ResponseCode::Ok,
                }),
            };
            let mut buf = [0u8; 64];
            let len = encode_message(&message, &mut buf).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("{}", to_hex(&buf[..len]));
        }
        Command::Decode { hex } => {
            let bytes = parse_hex(&hex)?;
            let message = decode_message(&bytes).map_err(|e| anyhow::anyhow!("{e}"))?;
            let summary = serde_json::json!({
                "header_session_id": to_hex(message.header.session_id.as_bytes()),
                "body": format!("{:?}", message.body),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
