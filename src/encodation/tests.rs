use pretty_assertions::assert_eq;

use super::{candidates, encode, DataEncodingError, EncodationType};

fn enc(data: &[u8]) -> (EncodationType, Vec<u8>) {
    encode(data, EncodationType::auto()).unwrap()
}

#[test]
fn test_auto_prefers_ascii() {
    assert_eq!(enc(b"TEST"), (EncodationType::Ascii, vec![85, 70, 84, 85]));
    assert_eq!(
        enc(b"0123456789"),
        (EncodationType::Ascii, vec![131, 153, 175, 197, 219])
    );
}

#[test]
fn test_auto_c40_for_upper_case() {
    let (t, cw) = enc(b"HELLO WORLD HELLO WORLD");
    assert_eq!(t, EncodationType::C40);
    assert_eq!(cw.len(), 18);
}

#[test]
fn test_auto_text_for_lower_case() {
    let (t, cw) = enc(b"hello world hello world");
    assert_eq!(t, EncodationType::Text);
    assert_eq!(cw.len(), 18);
}

#[test]
fn test_auto_base256_for_binary() {
    assert_eq!(
        enc(b"\x80\x81\x82\x83\x84\x85"),
        (
            EncodationType::Base256,
            vec![231, 50, 65, 216, 110, 5, 156, 50]
        )
    );
}

#[test]
fn test_auto_ties_go_to_first() {
    // "AIMAIMAIM" has 8 codewords in C40 and X12
    let (t, cw) = enc(b"AIMAIMAIM");
    assert_eq!(t, EncodationType::C40);
    assert_eq!(cw, vec![230, 91, 11, 91, 11, 91, 11, 254]);
}

#[test]
fn test_auto_is_minimal() {
    let inputs: [&[u8]; 6] = [
        b"Chunky Bacon",
        b"ABC>*\r",
        b".A.C1.3.DATA.123DATA.123DATA",
        b"hello world",
        b"\xff\xfe0",
        b"",
    ];
    for input in inputs {
        let (_, best) = enc(input);
        for (t, cw) in candidates(input, EncodationType::auto()) {
            assert!(best.len() <= cw.len(), "{:?} is shorter for {:?}", t, input);
        }
    }
}

#[test]
fn test_empty_input() {
    // ASCII and EDIFACT produce nothing and do not count
    let all = candidates(b"", EncodationType::auto());
    let types: Vec<EncodationType> = all.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        types,
        vec![
            EncodationType::C40,
            EncodationType::Text,
            EncodationType::X12,
            EncodationType::Base256
        ]
    );
    assert_eq!(enc(b""), (EncodationType::C40, vec![230, 254]));
}

#[test]
fn test_auto_skips_failed_c40() {
    let all = candidates(b"A\xc1", EncodationType::auto());
    assert!(all.iter().all(|(t, _)| *t != EncodationType::C40));
    assert_eq!(enc(b"A\xc1"), (EncodationType::Ascii, vec![66, 235, 66]));
}

#[test]
fn test_forced_encodation() {
    let (t, cw) = encode(b"TEST", EncodationType::Edifact.into()).unwrap();
    assert_eq!(t, EncodationType::Edifact);
    assert_eq!(cw, vec![240, 80, 84, 223, 85]);
}

#[test]
fn test_forced_encodation_fails() {
    assert_eq!(
        encode(b"lower", EncodationType::X12.into()),
        Err(DataEncodingError::IllegalData)
    );
    assert_eq!(
        encode(b"lower", EncodationType::Edifact.into()),
        Err(DataEncodingError::IllegalData)
    );
}

#[test]
fn test_gs1_only_on_request() {
    let data = b"\x1d01095011010209171719050810ABCD1234\x1d2110";
    let (t, _) = enc(data);
    assert_ne!(t, EncodationType::Gs1);

    let all = candidates(data, EncodationType::Gs1.into());
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].0, EncodationType::Gs1);
    assert_eq!(all[0].1[0], 232);
}
