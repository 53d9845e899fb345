use proptest::prelude::*;

use ed25519_dalek::SigningKey;
use gallifrey::KeyPair;
use gallifrey::signing::crypto::{sign, verify};
use gallifrey::utils::encoding;

fn keypair_from(seed: [u8; 32]) -> KeyPair {
    KeyPair::from_signing_key(SigningKey::from_bytes(&seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let keypair = keypair_from(seed);
        let sig = sign(keypair.signing_key(), &msg);
        prop_assert!(verify(&keypair.verifying_key(), &msg, &sig));
    }

    #[test]
    fn signature_does_not_transfer_to_other_message(
        seed in prop::array::uniform32(any::<u8>()),
        m1 in prop::collection::vec(any::<u8>(), 0..128),
        m2 in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        prop_assume!(m1 != m2);
        let keypair = keypair_from(seed);
        let sig = sign(keypair.signing_key(), &m1);
        prop_assert!(!verify(&keypair.verifying_key(), &m2, &sig));
    }

    #[test]
    fn signature_does_not_transfer_to_other_key(
        seed1 in prop::array::uniform32(any::<u8>()),
        seed2 in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        prop_assume!(seed1 != seed2);
        let signer = keypair_from(seed1);
        let other = keypair_from(seed2);
        let sig = sign(signer.signing_key(), &msg);
        prop_assert!(!verify(&other.verifying_key(), &msg, &sig));
    }

    #[test]
    fn base64_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let text = encoding::encode(&bytes);
        prop_assert_eq!(encoding::decode(&text).unwrap(), bytes);
    }

    #[test]
    fn arbitrary_signature_text_never_panics(
        seed in prop::array::uniform32(any::<u8>()),
        text in ".{0,120}"
    ) {
        let keypair = keypair_from(seed);
        // Random text is overwhelmingly not a valid signature
        let _ = verify(&keypair.verifying_key(), b"hello\n", &text);
    }
}
