// Session walkthrough against a scripted tag.
//
// There is no radio here: a MockTransport is seeded with the answers an
// NTAG213 would give, wrapped in the software CRC_A layer, and driven
// through connect, read, authenticate and halt. Run with
// `RUST_LOG=trace cargo run --example session_walkthrough --features diagnostics`
// to see every frame.

use libntag::prelude::*;
use libntag::test_support::{sample_uid, seed_connect_software, with_crc};
use libntag::transport::mock::MockTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let uid = sample_uid();
    let mut mock = MockTransport::new();
    seed_connect_software(&mut mock);
    mock.push_bytes(with_crc(&[0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x0F, 0x03]));
    mock.push_bytes(with_crc(&[0xE1, 0x10, 0x12, 0x00, 0x03, 0x00, 0xFE, 0x00, 0, 0, 0, 0, 0, 0, 0, 0]));
    mock.push_bytes(with_crc(&[0x00, 0x00]));

    let mut dev = DeviceBuilder::new()
        .with_software_crc(mock, CrcA)
        .variant(TagVariant::Ntag213)
        .build()?;

    println!("Connecting to {}...", uid.to_hex());
    dev.connect(uid)?;
    println!("State: {:?}", dev.state());

    let version = dev.get_version()?;
    println!("Tag reports {}", version.variant()?);

    let cc = dev.read(3)?;
    println!("Pages 3..6: {}", bytes_to_hex_spaced(&cc));

    match dev.pwd_auth(0xFFFF_FFFF) {
        Ok(()) => println!("Authenticated"),
        Err(e) => println!("Authentication failed: {}", e),
    }

    dev.halt()?;
    println!("State: {:?}", dev.state());

    // A halted tag is not connected; the read is refused before anything
    // goes on the air.
    if let Err(e) = dev.read(4) {
        println!("Read after halt: {}", e);
    }

    let raw = dev.into_link().into_inner();
    println!("{} frames exchanged", raw.transmitted.len());
    Ok(())
}
