//! SimpleStorage contract artifacts shipped with the CLI.
//!
//! The contract stores a single `uint256` with `set(newValue)` and `get()`,
//! emitting `ValueChanged` on writes.

use serde_json::{json, Value};

pub const SET_METHOD: &str = "set";
pub const GET_METHOD: &str = "get";

/// Creation bytecode for SimpleStorage (solc 0.8.20).
pub const SIMPLE_STORAGE_BYTECODE: &str = "0x608060405234801561001057600080fd5b5061012b806100206000396000f3fe608060405260043610601f5760003560e01c806360fe47b11460245780636d4ce63c14603e575b600080fd5b603c6004803603810190603891906100b6565b6056565b005b6044605c565b604051605191906100e1565b60405180910390f35b60005481565b60008054905090565b600081359050607081610114565b92915050565b600060208284031215608657600080fd5b600061009484828501606a565b91505092915050565b6100a681610107565b82525050565b60006020820190506100c1600083018461009d565b92915050565b6000819050919050565b6100db81610107565b81146100e657600080fd5b50565b6000813590506100f88161011f565b92915050565b600080fd5b61010c81610107565b811461011757600080fd5b5056fea2646970667358221220a1d3d7d0a0d9c23a4c4fb2b0bd4c9d9d6e0773f3941d1b7a6f2d7a3d2b0a9a7d64736f6c63430008140033";

fn set_fragment() -> Value {
    json!({
        "inputs": [{"internalType": "uint256", "name": "newValue", "type": "uint256"}],
        "name": SET_METHOD,
        "outputs": [],
        "stateMutability": "nonpayable",
        "type": "function"
    })
}

fn get_fragment() -> Value {
    json!({
        "inputs": [],
        "name": GET_METHOD,
        "outputs": [{"internalType": "uint256", "name": "", "type": "uint256"}],
        "stateMutability": "view",
        "type": "function"
    })
}

fn value_changed_event() -> Value {
    json!({
        "anonymous": false,
        "inputs": [{"indexed": false, "internalType": "uint256", "name": "newValue", "type": "uint256"}],
        "name": "ValueChanged",
        "type": "event"
    })
}

/// Full ABI, used for deployment.
pub fn simple_storage_abi() -> Value {
    Value::Array(vec![set_fragment(), get_fragment(), value_changed_event()])
}

/// Function-only ABI, used for `set`/`get` calls.
pub fn simple_storage_call_abi() -> Value {
    Value::Array(vec![set_fragment(), get_fragment()])
}
