use blockagent::intent::{Action, Chain, classify};

#[test]
fn empty_input_is_unknown() {
    let intent = classify("");
    assert_eq!(intent.action, Action::Unknown);
    assert_eq!(intent.chain, None);
    assert_eq!(intent.address, None);
    assert_eq!(intent.value, None);
}

#[test]
fn new_wallet_on_celo() {
    let intent = classify("create a new wallet on celo");
    assert_eq!(intent.action, Action::NewWallet);
    assert_eq!(intent.chain, Some(Chain::Celo));
}

#[test]
fn create_wallet_phrase() {
    assert_eq!(classify("Create Wallet please").action, Action::NewWallet);
}

#[test]
fn balance_with_long_address() {
    let intent = classify("check my balance 0x1234567890abcdef1234");
    assert_eq!(intent.action, Action::GetBalance);
    assert_eq!(intent.address.as_deref(), Some("0x1234567890abcdef1234"));
    assert_eq!(intent.chain, None);
}

#[test]
fn balance_with_short_address_has_no_address() {
    let intent = classify("balance 0xabc");
    assert_eq!(intent.action, Action::GetBalance);
    assert_eq!(intent.address, None);
}

#[test]
fn balance_address_is_case_folded() {
    let intent = classify("  Balance of 0xABCDEF0123456789ABCDEF on Harmony ");
    assert_eq!(intent.address.as_deref(), Some("0xabcdef0123456789abcdef"));
    assert_eq!(intent.chain, Some(Chain::Harmony));
}

#[test]
fn check_my_money_is_balance() {
    assert_eq!(classify("check my money").action, Action::GetBalance);
}

#[test]
fn deploy_storage_on_aurora() {
    let intent = classify("deploy simple storage on aurora");
    assert_eq!(intent.action, Action::DeploySimpleStorage);
    assert_eq!(intent.chain, Some(Chain::Aurora));
}

#[test]
fn deploy_alone_is_not_a_storage_deployment() {
    assert_eq!(classify("deploy my token").action, Action::Unknown);
}

#[test]
fn set_storage_extracts_first_number() {
    let intent = classify("set storage to 42");
    assert_eq!(intent.action, Action::SetStorage);
    assert_eq!(intent.value, Some(42));

    assert_eq!(classify("set value 7 then 9").value, Some(7));
}

#[test]
fn set_value_without_digits_defaults_to_zero() {
    let intent = classify("set value");
    assert_eq!(intent.action, Action::SetStorage);
    assert_eq!(intent.value, Some(0));
}

#[test]
fn set_value_reads_non_ascii_digits() {
    let arabic = classify("set value ٤٢");
    assert_eq!(arabic.action, Action::SetStorage);
    assert_eq!(arabic.value, Some(42));

    assert_eq!(classify("set storage to ７").value, Some(7));
    assert_eq!(classify("set value ১২৩ on celo").value, Some(123));
}

#[test]
fn set_value_saturates_only_on_overflow() {
    assert_eq!(classify("set value 18446744073709551615").value, Some(u64::MAX));
    assert_eq!(classify("set value 18446744073709551616").value, Some(u64::MAX));
    assert_eq!(classify("set value 18446744073709551614").value, Some(u64::MAX - 1));
}

#[test]
fn read_on_harmony() {
    let intent = classify("read the stored value on harmony");
    assert_eq!(intent.action, Action::ReadStorage);
    assert_eq!(intent.chain, Some(Chain::Harmony));
}

#[test]
fn get_value_is_read() {
    assert_eq!(classify("get value").action, Action::ReadStorage);
}

#[test]
fn chain_priority_follows_scan_order() {
    assert_eq!(classify("celo aurora").chain, Some(Chain::Celo));
    assert_eq!(classify("harmony then aurora").chain, Some(Chain::Aurora));
}

#[test]
fn unknown_keeps_detected_chain() {
    let intent = classify("what is up on aurora");
    assert_eq!(intent.action, Action::Unknown);
    assert_eq!(intent.chain, Some(Chain::Aurora));
}

#[test]
fn earlier_rules_win() {
    // wallet beats balance
    assert_eq!(classify("new wallet and balance").action, Action::NewWallet);
    // balance beats deploy
    assert_eq!(classify("deploy storage and show balance").action, Action::GetBalance);
    // deploy beats set
    assert_eq!(classify("deploy storage and set value 3").action, Action::DeploySimpleStorage);
    // "set storage" also contains "storage" but no "deploy"
    assert_eq!(classify("set storage 5 already").action, Action::SetStorage);
}

#[test]
fn fields_only_set_by_their_branch() {
    let intent = classify("read 0x1234567890abcdef1234567 value 12");
    assert_eq!(intent.action, Action::ReadStorage);
    assert_eq!(intent.address, None);
    assert_eq!(intent.value, None);
    assert_eq!(intent.args, None);
}

#[test]
fn classification_is_idempotent() {
    let text = "set storage to 42 on celo";
    assert_eq!(classify(text), classify(text));
}

#[test]
fn intent_serializes_with_wire_names() {
    let json = serde_json::to_value(classify("deploy simple storage on aurora")).unwrap();
    assert_eq!(json["action"], "DEPLOY_SIMPLE_STORAGE");
    assert_eq!(json["chain"], "aurora");
}
