//! Launch command implementation

use anyhow::Result;
use nsrig_namespace::NamespaceConfig;

pub fn execute(kinds: &[String]) -> Result<i32> {
    let config = NamespaceConfig::from_tokens(kinds);

    let pid = nsrig_namespace::launch(&config)?;

    // The one stdout line: the holder's PID in our namespace, the caller's
    // only handle for teardown
    println!("{pid}");

    Ok(0)
}
