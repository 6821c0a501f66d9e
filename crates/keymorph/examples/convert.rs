/*!
*   Utility that imports a key from any text format and prints its other
*   renditions and derived identifiers to STDOUT.
*/

use clap::{Parser, ValueEnum};
use keymorph::{Curve, KeyConverter, KeyFormat, KeyKind};

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help(true))]
struct Args {
    /// Curve the key belongs to
    #[arg(value_enum, short, long, required = true)]
    curve: CurveArg,

    /// Format of the input
    #[arg(value_enum, short, long, required = true)]
    format: FormatArg,

    /// The key itself (hex string, WIF, mnemonic, JWK JSON or PEM)
    input: String,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum CurveArg {
    Secp256k1,
    P256,
    Ed25519,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum FormatArg {
    Hex,
    Wif,
    Bip39,
    Jwk,
    Pkcs8,
}

fn main() {
    let args = Args::parse();

    let curve = match args.curve {
        CurveArg::Secp256k1 => Curve::Secp256k1,
        CurveArg::P256 => Curve::P256,
        CurveArg::Ed25519 => Curve::Ed25519,
    };
    let format = match args.format {
        FormatArg::Hex => KeyFormat::Hex,
        FormatArg::Wif => KeyFormat::Wif,
        FormatArg::Bip39 => KeyFormat::Bip39,
        FormatArg::Jwk => KeyFormat::Jwk,
        FormatArg::Pkcs8 => KeyFormat::Pkcs8,
    };

    let mut converter = KeyConverter::new(curve);
    converter
        .import(args.input.as_str(), format, KeyKind::Private)
        .expect("Couldn't import the key");

    println!("Private key (hex): {}", converter.private_key_hex().unwrap());
    println!("Public key (hex) : {}", converter.public_key_hex().unwrap());

    println!(
        "\nJWK:\n{}",
        converter
            .export(KeyFormat::Jwk, KeyKind::Private)
            .unwrap()
            .as_text()
            .unwrap()
    );
    println!(
        "\nPKCS#8 PEM:\n{}",
        converter
            .export(KeyFormat::Pkcs8, KeyKind::Private)
            .unwrap()
            .as_text()
            .unwrap()
    );

    println!("IPFS peer ID     : {}", converter.ipfs_peer_id().unwrap());
    if curve == Curve::Secp256k1 {
        println!("Bitcoin address  : {}", converter.bitcoin_address().unwrap());
        println!("Ethereum address : {}", converter.ethereum_address().unwrap());
        println!(
            "WIF              : {}",
            converter
                .export(KeyFormat::Wif, KeyKind::Private)
                .unwrap()
                .as_text()
                .unwrap()
        );
    }
}
