use crate::cli::render;
use crate::error::BlockAgentResult;
use crate::intent;

pub fn handle_classify(text: String) -> BlockAgentResult<()> {
    let intent = intent::classify(&text);
    println!("{}", render::intent_line(&intent));
    println!("{}", serde_json::to_string_pretty(&intent)?);
    Ok(())
}
