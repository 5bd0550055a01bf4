//! Round-trip laws for the bitstream codec and the JSON word-list form.
//!
//! For any record whose fields are within their enumerations,
//! `decode(encode(R)) = R`; for any store that decodes successfully,
//! re-encoding its record reproduces the store bit for bit (unmapped
//! positions are preserved because encoding writes into the existing
//! store). Records are sampled uniformly per field.

use clb_bitstream::{decode, encode, BitBuffer, Bitstream};
use clb_conformance::sample_config;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn decode_of_encode_is_identity() {
    let mut rng = StdRng::seed_from_u64(0xC1B);
    for _ in 0..200 {
        let cfg = sample_config(&mut rng);
        let mut buf = BitBuffer::new();
        encode(&cfg, &mut buf).unwrap();
        let back = decode(&buf).unwrap();
        assert_eq!(back, cfg);
    }
}

#[test]
fn encode_of_decode_reproduces_the_store() {
    let mut rng = StdRng::seed_from_u64(0xB5);
    for _ in 0..200 {
        let cfg = sample_config(&mut rng);
        let mut buf = BitBuffer::new();
        encode(&cfg, &mut buf).unwrap();
        let words = buf.to_words();

        let mut second = BitBuffer::from_words(&words).unwrap();
        let decoded = decode(&second).unwrap();
        encode(&decoded, &mut second).unwrap();
        assert_eq!(second.to_words(), words);
    }
}

#[test]
fn unmapped_bits_survive_a_decode_encode_cycle() {
    // Positions the field tables never claim (reserved in silicon) must not
    // be disturbed by re-encoding the decoded record into the same store.
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let cfg = sample_config(&mut rng);
    let mut buf = BitBuffer::new();
    encode(&cfg, &mut buf).unwrap();

    // Bits 1614/1615 are skipped by element 0's port B discontinuity.
    buf.set_bit(1614, true).unwrap();
    buf.set_bit(1615, true).unwrap();
    let words = buf.to_words();

    let decoded = decode(&buf).unwrap();
    encode(&decoded, &mut buf).unwrap();
    assert_eq!(buf.to_words(), words);
}

#[test]
fn json_file_round_trip_survives_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    for i in 0..20 {
        let cfg = sample_config(&mut rng);
        let path = dir.path().join(format!("bs_{i}.json"));

        let mut bs = Bitstream::new();
        *bs.config_mut() = cfg.clone();
        bs.save(&path).unwrap();

        let reloaded = Bitstream::load(&path).unwrap();
        assert_eq!(reloaded.config(), &cfg);
        assert_eq!(reloaded.buffer(), bs.buffer());
    }
}

#[test]
fn saved_documents_use_lowercase_four_digit_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bs.json");
    let mut rng = StdRng::seed_from_u64(7);

    let mut bs = Bitstream::new();
    *bs.config_mut() = sample_config(&mut rng);
    bs.save(&path).unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let tokens = doc["bitstream"].as_array().unwrap();
    assert_eq!(tokens.len(), 102);
    for t in tokens {
        let t = t.as_str().unwrap();
        assert_eq!(t.len(), 4);
        assert!(t.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn random_word_lists_either_decode_or_name_a_field() {
    // Arbitrary stores are not all valid (unassigned CLBIN codes, LUT input
    // codes past 21), but failures must be typed and name the field.
    let mut rng = StdRng::seed_from_u64(99);
    let mut decoded_some = false;
    for _ in 0..50 {
        let words: Vec<u16> = (0..102).map(|_| rng.gen()).collect();
        let buf = BitBuffer::from_words(&words).unwrap();
        match decode(&buf) {
            Ok(_) => decoded_some = true,
            Err(clb_model::ClbError::UnknownEncoding { field, .. }) => {
                assert!(!field.is_empty());
            }
            Err(other) => panic!("unexpected decode failure: {other}"),
        }
    }
    // With 30 of 64 CLBIN codes valid across 16 muxes, a fully random store
    // almost never decodes; the assertion is on the error shape above.
    let _ = decoded_some;
}
