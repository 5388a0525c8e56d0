// Path: crates/cli/src/script.rs

//! TOML call scripts: one `[[step]]` table per top-level call.

use anyhow::{anyhow, Context, Result};
use dnote_execution::{deploy_standard, Deployment, Host};
use dnote_services::delegator::calls as delegator_calls;
use dnote_services::note_store::{calls as note_calls, NoteView};
use dnote_types::app::AccountId;
use dnote_types::codec;
use dnote_types::config::HostConfig;
use dnote_types::error::{ErrorCode, TransactionError};
use parity_scale_codec::Decode;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::Write;

/// The caller used by steps that do not name one.
pub const DEFAULT_CALLER: AccountId = AccountId([0x11; 32]);

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub step: Vec<Step>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing script")
    }
}

#[derive(Deserialize, Debug)]
pub struct Step {
    #[serde(default)]
    pub caller: Option<AccountId>,
    #[serde(default)]
    pub via: Route,
    #[serde(flatten)]
    pub op: Op,
}

/// Which deployed contract receives the request bytes.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Delegator,
    NoteStore,
    StringHandler,
}

impl Route {
    fn resolve(self, deployment: &Deployment) -> AccountId {
        match self {
            Route::Delegator => deployment.delegator,
            Route::NoteStore => deployment.note_store,
            Route::StringHandler => deployment.string_handler,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Route::Delegator => "delegator",
            Route::NoteStore => "note_store",
            Route::StringHandler => "string_handler",
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum Op {
    CreateNote {
        #[serde(default)]
        title: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        tag: String,
    },
    ModifyNote {
        id: u64,
        #[serde(default)]
        title: String,
        #[serde(default)]
        content: String,
    },
    DeleteNote {
        id: u64,
    },
    GetNote {
        id: u64,
    },
    Count,
    /// `target` is a deployment name or a `0x`-prefixed identity.
    SetTarget {
        target: String,
    },
    Target,
    /// Sends arbitrary hex-encoded bytes and prints the reply as hex.
    Raw {
        hex: String,
    },
}

impl Op {
    fn name(&self) -> &'static str {
        match self {
            Op::CreateNote { .. } => "create_note",
            Op::ModifyNote { .. } => "modify_note",
            Op::DeleteNote { .. } => "delete_note",
            Op::GetNote { .. } => "get_note",
            Op::Count => "count",
            Op::SetTarget { .. } => "set_target",
            Op::Target => "target",
            Op::Raw { .. } => "raw",
        }
    }

    fn request(&self, deployment: &Deployment) -> Result<Vec<u8>> {
        Ok(match self {
            Op::CreateNote {
                title,
                content,
                tag,
            } => note_calls::create_note(title, content, tag),
            Op::ModifyNote { id, title, content } => note_calls::modify_note(*id, title, content),
            Op::DeleteNote { id } => note_calls::delete_note(*id),
            Op::GetNote { id } => note_calls::get_note_by_id(*id),
            Op::Count => note_calls::get_note_count(),
            Op::SetTarget { target } => delegator_calls::set_target(resolve_name(target, deployment)?),
            Op::Target => delegator_calls::target(),
            Op::Raw { hex } => hex::decode(hex.trim_start_matches("0x"))
                .map_err(|e| anyhow!("invalid raw hex: {}", e))?,
        })
    }

    fn render(&self, output: &[u8]) -> Result<Value> {
        Ok(match self {
            Op::CreateNote { .. } => json!({ "id": decode::<u64>(output)? }),
            Op::ModifyNote { .. } | Op::DeleteNote { .. } | Op::SetTarget { .. } => {
                decode::<()>(output)?;
                Value::Null
            }
            Op::GetNote { .. } => serde_json::to_value(decode::<NoteView>(output)?)?,
            Op::Count => json!({ "count": decode::<u64>(output)? }),
            Op::Target => json!({ "target": decode::<AccountId>(output)?.to_string() }),
            Op::Raw { .. } => json!({ "hex": hex::encode(output) }),
        })
    }
}

fn decode<T: Decode>(bytes: &[u8]) -> Result<T> {
    codec::from_bytes_canonical(bytes).map_err(|e| anyhow!("undecodable reply: {}", e))
}

fn resolve_name(name: &str, deployment: &Deployment) -> Result<AccountId> {
    Ok(match name {
        "delegator" => deployment.delegator,
        "note_store" => deployment.note_store,
        "string_handler" => deployment.string_handler,
        other => other.parse()?,
    })
}

fn error_value(err: &TransactionError) -> Value {
    json!({ "code": err.code(), "message": err.to_string() })
}

/// Deploys the standard contracts on a fresh in-memory host and runs every
/// step as its own top-level call, writing one JSON line per step.
///
/// A failing step is reported and rolled back; later steps still run.
/// Returns the number of failed steps.
pub fn execute<W: Write>(config: &HostConfig, script: &Script, out: &mut W) -> Result<usize> {
    let mut host = Host::in_memory(config);
    let deployment = deploy_standard(&mut host);
    writeln!(out, "{}", json!({ "deployment": deployment }))?;

    let mut failures = 0;
    for (index, step) in script.step.iter().enumerate() {
        let caller = step.caller.unwrap_or(DEFAULT_CALLER);
        let to = step.via.resolve(&deployment);
        let mut line = json!({
            "step": index + 1,
            "op": step.op.name(),
            "via": step.via.name(),
        });

        let request = step
            .op
            .request(&deployment)
            .with_context(|| format!("building step {}", index + 1))?;
        match host.call(caller, to, &request) {
            Ok(output) => line["ok"] = step.op.render(&output)?,
            Err(err) => {
                failures += 1;
                line["error"] = error_value(&err);
            }
        }
        writeln!(out, "{}", line)?;
    }
    Ok(failures)
}
