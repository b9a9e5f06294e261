use std::str::FromStr;

use btc_keyseed::prelude::*;

const SEED_HEX: &str = "2f00201a843bf367ed45fda52ea0d3aba21ee730ad1a93189e67ae0e6faae4bb3a32629b955d1cfcde3becc25f2e39519e1e5d9ee8318c6217b11bcedb9f9683";
const TRANSCRIPT_WIF: &str = "5JbkdquZp2ddnnng1FAsdmRjZLiEdEtk3j6HwNL7iCaoZVrguzQ";
const TRANSCRIPT_XPRV: &str = "xprv9s21ZrQH143K34sBvFpfdXVRV7hj5YXScWB3oSQBZuh74XLM1eYMZybGPy9eggeB92J2Ts7QGK5Z189k9xoopp5j1tBAfH7CEhbbdP5CDUH";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn legacy_transcript_reproduced() {
    init_logging();
    let config = DerivationConfig::new().with_digest_profile(DigestProfile::LegacyBlockSealing);
    let keys = KeyPipeline::new(config).from_seed_hex(SEED_HEX).unwrap();
    assert_eq!(keys.wif, TRANSCRIPT_WIF);
    assert_eq!(keys.xprv, TRANSCRIPT_XPRV);
    assert_eq!(encode_02x(&keys.chaincode), "6552afdf4bc3a927795fb55a2ac9a7374747be8023329937157a95cae49b200f");
}

#[test]
fn standard_profile_is_bip32() {
    init_logging();
    let keys = KeyPipeline::new(DerivationConfig::default()).from_seed_hex(SEED_HEX).unwrap();
    assert_eq!(keys.wif, "5Jm61AFdu3qP8RNU9STqwW4bPhMZ9AwjS9Mu6nGvpPcFvf3qAA7");
    assert_eq!(keys.xprv, "xprv9s21ZrQH143K3RqoZMrFcfZLyKU9LhPK4qx2WUG5mFsJvbFcsvVhnmUDtLz3pK91tfxWVCSvn7QtM8pwdLwBmoDurWzE9nCWCVChenL24ei");
}

#[test]
fn exported_strings_parse_back() {
    let keys = KeyPipeline::new(DerivationConfig::default()).from_seed_hex(SEED_HEX).unwrap();

    let (key, network, compressed) = PrivKey::from_wif(&keys.wif).unwrap();
    assert_eq!(key, keys.private_key);
    assert_eq!(network, Network::Bitcoin);
    assert!(!compressed);

    let xprv = Xprv::from_str(&keys.xprv).unwrap();
    assert_eq!(xprv.get_prv(), keys.private_key);
    assert_eq!(xprv.chaincode(), keys.chaincode);
    assert_eq!(xprv.depth, 0);

    let raw = xprv.to_bytes();
    assert_eq!(raw.len(), 82);
    assert_eq!(Base58::decode(&keys.xprv).unwrap(), raw.to_vec());
}

#[test]
fn generated_run_is_consistent() {
    init_logging();
    let list = Language::English.word_list();
    let config = DerivationConfig::new()
        .with_passphrase("correct horse")
        .with_compressed_wif(true)
        .with_network(Network::Testnet);
    let pipeline = KeyPipeline::new(config);

    let derivation = pipeline.generate(&mut OsEntropy, &list).unwrap();
    assert_eq!(derivation.mnemonic.word_count(), 24);

    let again = pipeline.from_mnemonic(&Mnemonic::from_phrase(&derivation.mnemonic.phrase(), &list).unwrap()).unwrap();
    assert_eq!(again, derivation);
    assert_eq!(derivation.seed, Seed::from_phrase_text(&derivation.mnemonic.phrase(), "correct horse").unwrap());

    assert!(derivation.keys.wif.starts_with('c'));
    assert!(derivation.keys.xprv.starts_with("tprv"));
    assert_eq!(MasterKey::from_seed(&derivation.seed).unwrap().key(), derivation.keys.private_key.as_bytes());
}

#[test]
fn wordlist_from_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("wordlists/english.txt");
    let list = Wordlist::from_path(&path).unwrap();
    assert_eq!(list, Language::English.word_list());
}
