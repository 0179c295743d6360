use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

use crate::agent::AgentFlow;
use crate::backend::BackendClient;
use crate::cli::render;
use crate::config::ConfigOverrides;
use crate::dispatch::Dispatcher;
use crate::error::BlockAgentResult;
use crate::intent::{self, Chain};
use crate::session::Session;

const HELP: &str = "\
Type a command in plain words, e.g. 'create a new wallet', 'balance 0x... on aurora',
'deploy simple storage', 'set value 42', 'read value'.

  :plan <prompt>       ask the agent for a plan
  :execute [approve]   simulate the plan, or execute it with 'approve'
  :chain <name>        chain used for plans (celo, aurora, harmony, default)
  :address <0x...>     contract address for storage reads/writes
  :session             show remembered state
  :help                this text
  :quit                leave";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Run(String),
    Plan(String),
    Execute { approve: bool },
    Chain(Option<Chain>),
    Address(String),
    Session,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return ShellCommand::Run(line.to_string());
    };

    let (cmd, arg) = match rest.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (rest, ""),
    };

    match cmd {
        "plan" if arg.is_empty() => ShellCommand::Invalid("usage: :plan <prompt>".to_string()),
        "plan" => ShellCommand::Plan(arg.to_string()),
        "execute" | "exec" => match arg {
            "" => ShellCommand::Execute { approve: false },
            "approve" => ShellCommand::Execute { approve: true },
            _ => ShellCommand::Invalid("usage: :execute [approve]".to_string()),
        },
        "chain" => match arg {
            "" | "default" => ShellCommand::Chain(None),
            name => match name.parse::<Chain>() {
                Ok(chain) => ShellCommand::Chain(Some(chain)),
                Err(e) => ShellCommand::Invalid(e.to_string()),
            },
        },
        "address" if arg.is_empty() => ShellCommand::Invalid("usage: :address <0x...>".to_string()),
        "address" => ShellCommand::Address(arg.to_string()),
        "session" => ShellCommand::Session,
        "help" | "h" | "?" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Invalid(format!("unknown command :{}", other)),
    }
}

/// One interactive session: the session state lives as long as the shell.
pub struct Shell<B: BackendClient> {
    dispatcher: Dispatcher<B>,
    session: Session,
    plan_chain: Option<Chain>,
}

impl<B: BackendClient> Shell<B> {
    pub fn new(backend: B) -> Self {
        Self {
            dispatcher: Dispatcher::new(backend),
            session: Session::new(),
            plan_chain: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn backend(&self) -> &B {
        self.dispatcher.backend()
    }

    /// Returns false when the user asked to leave.
    pub async fn handle(&mut self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::Empty => {}
            ShellCommand::Run(text) => {
                let intent = intent::classify(&text);
                println!("{}", render::intent_line(&intent));
                let outcome = self.dispatcher.dispatch(&intent, &mut self.session, None).await;
                render::print_outcome(&outcome);
            }
            ShellCommand::Plan(prompt) => {
                let flow = AgentFlow::new(self.dispatcher.backend());
                match flow.plan(&prompt, self.plan_chain, &mut self.session).await {
                    Ok(plan) => println!("📋 Plan\n{}", render::json(&plan)),
                    Err(e) => {
                        error!("Planning failed: {}", e);
                        println!("❌ {}", e);
                    }
                }
            }
            ShellCommand::Execute { approve } => {
                let flow = AgentFlow::new(self.dispatcher.backend());
                match flow.execute(approve, None, &mut self.session).await {
                    Ok(result) => println!("{}", render::json(&result)),
                    Err(e) => {
                        error!("Execution failed: {}", e);
                        println!("❌ {}", e);
                    }
                }
            }
            ShellCommand::Chain(chain) => {
                self.plan_chain = chain;
                println!("🔗 Plan chain: {}", chain.map(|c| c.as_str()).unwrap_or("default"));
            }
            ShellCommand::Address(address) => {
                self.session.remember_deployment(&address);
                println!("📌 Contract address: {}", address);
            }
            ShellCommand::Session => {
                println!("  • Contract: {}", self.session.storage_addr.as_deref().unwrap_or("(none)"));
                println!("  • Plan tool: {}", self.session.plan_tool().unwrap_or("(none)"));
                println!("  • Plan chain: {}", self.plan_chain.map(|c| c.as_str()).unwrap_or("default"));
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Invalid(message) => println!("⚠️  {}", message),
            ShellCommand::Quit => return false,
        }
        true
    }
}

pub async fn run_shell(overrides: &ConfigOverrides) -> BlockAgentResult<()> {
    let backend = super::connect(overrides).await?;
    info!("🖥️ Starting shell against {}", backend.base_url());

    println!("🧰 BlockAgent shell. Type :help for commands, :quit to leave.");

    let mut shell = Shell::new(backend);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if !shell.handle(parse_line(&line)).await {
            break;
        }
    }

    info!("👋 Shell closed");
    Ok(())
}
