use nonce_check::{ConsistencyChecker, SignatureInputs};
use secp256k1_scalar::MontgomeryBackend;

fn main() {
    let inputs = SignatureInputs::from_hex(
        "89468bb80547d34a6a3bdaa6bdbbca688fface3a8769ec07fac39aee56796b46",
        "599fc0aaae7952b6adf65140fbd1b9221ba5d6a32afdebcbd927a3b59fd637be",
        "37541378882d53d59d9ecb80ccd6f72e978117845a250337e92351cac498c180",
        "aabae116f4f5263f049dd6a1c54a88b6df0f43d2909873b8114d679c5b6430bd",
        "c263c7d05ff8529c60993d350f34dd2b8dbf37eb2e3c7c49fac85d45188073ac",
    )
    .expect("parse inputs");

    let report = ConsistencyChecker::secp256k1().check(&inputs).expect("check");
    println!("{report}");

    let json = serde_json::to_string_pretty(&inputs).expect("serialize inputs");
    let inputs2: SignatureInputs = serde_json::from_str(&json).expect("deserialize inputs");
    let report2 = ConsistencyChecker::new(MontgomeryBackend)
        .check(&inputs2)
        .expect("check");
    assert_eq!(report, report2);
}
