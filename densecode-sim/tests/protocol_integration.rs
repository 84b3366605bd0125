//! Integration tests for the superdense coding engine and its narration

use densecode_core::{AmplitudeFormat, BitPair};
use densecode_sim::{narrate, ProtocolConfig, Stage, SuperdenseCoding};
use densecode_state::SamplingMode;
use proptest::prelude::*;

fn protocol(seed: u64) -> SuperdenseCoding {
    SuperdenseCoding::new(ProtocolConfig::new().with_seed(seed)).unwrap()
}

#[test]
fn test_transcript_for_10() {
    let mut sim = protocol(3);
    let run = sim.transmit("10".parse().unwrap()).unwrap();
    let format = AmplitudeFormat::rounded(4);

    let rendered = |stage| run.step(stage).unwrap().state.display_with(&format);
    assert_eq!(rendered(Stage::Initial), "|00>");
    assert_eq!(rendered(Stage::Superposed), "0.7071 |00> + 0.7071 |10>");
    assert_eq!(rendered(Stage::Entangled), "0.7071 |00> + 0.7071 |11>");
    assert_eq!(rendered(Stage::Encoded), "0.7071 |00> + -0.7071 |11>");
    assert_eq!(rendered(Stage::Disentangled), "0.7071 |00> + -0.7071 |10>");
    assert_eq!(rendered(Stage::Decoded), "|10>");
    assert_eq!(rendered(Stage::Measured), "|10>");

    assert!(run.succeeded());
    assert_eq!(run.to_string(), "sent 10 received 10 (p = 1.0000)");
}

#[test]
fn test_narration_output() {
    let mut sim = protocol(11);
    let run = sim.transmit("11".parse().unwrap()).unwrap();

    let mut out = Vec::new();
    narrate::write_banner(&mut out).unwrap();
    narrate::write_run(&mut out, &run, &sim.config().display_format()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Eve starts with two qubits in state\n  |00>"));
    assert!(text.contains("For encoding 11, the X and Z gates are applied"));
    assert!(text.contains("Alice sends her qubit to Bob."));
    assert!(text.contains("Because Alice and Bob's qubits were entangled by Eve,"));
    assert!(text.contains("Bob applies a reverse operation of Eve's original operation\nFirst a controlled NOT:"));
    assert!(text.ends_with("The result of Bob's measurement is 11, Alice's two bits were 11.\n"));
}

#[test]
fn test_preparation_is_narrated_before_the_bits_are_chosen() {
    let format = AmplitudeFormat::rounded(4);
    let mut sim = protocol(8);
    let prepared = sim.prepare_transcript().unwrap();

    let mut before = Vec::new();
    narrate::write_steps(&mut before, &prepared.steps, &format).unwrap();
    let before = String::from_utf8(before).unwrap();

    let bell = before.find("0.7071 |00> + 0.7071 |11>").unwrap();
    let handoff = before.find("Eve sends one qubit to Alice and another to Bob.").unwrap();
    let alice = before.find("Alice wants to encode two classical bits").unwrap();
    assert!(bell < handoff && handoff < alice);
    assert!(!before.contains("For encoding"));

    let run = sim.complete(prepared, "01".parse().unwrap()).unwrap();
    let mut after = Vec::new();
    narrate::write_steps(&mut after, run.steps_after(Stage::Entangled), &format).unwrap();
    narrate::write_outcome(&mut after, &run).unwrap();
    let after = String::from_utf8(after).unwrap();

    assert!(after.starts_with("For encoding 01, the X (NOT) gate is applied"));
    assert!(!after.contains("Eve starts with two qubits"));

    // The split walkthrough reads exactly like the one-shot narration
    let mut whole = Vec::new();
    narrate::write_run(&mut whole, &run, &format).unwrap();
    assert_eq!(String::from_utf8(whole).unwrap(), before + &after);
}

#[test]
fn test_prepare_encode_decode_api() {
    let mut sim = protocol(5);
    for bits in BitPair::ALL {
        let mut state = sim.prepare().unwrap();
        sim.encode(&mut state, bits);
        assert_eq!(sim.decode(state).unwrap(), bits);
    }
}

#[test]
fn test_sequential_sampling_still_decodes() {
    let config = ProtocolConfig::new()
        .with_seed(99)
        .with_sampling(SamplingMode::Sequential)
        .with_trials(50);
    let mut sim = SuperdenseCoding::new(config).unwrap();
    let stats = sim.verify().unwrap();
    assert_eq!(stats.total_runs(), 200);
    assert_eq!(stats.success_rate(), 1.0);
}

proptest! {
    /// Property: any seed decodes every pair correctly
    #[test]
    fn any_seed_roundtrips(seed in any::<u64>(), index in 0usize..4) {
        let bits = BitPair::from_index(index).unwrap();
        let mut sim = protocol(seed);
        prop_assert_eq!(sim.send(bits).unwrap(), bits);
    }
}
