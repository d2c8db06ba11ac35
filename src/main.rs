use anyhow::{Context, Result};
use hornlog::{engine, input, KnowledgeBase, Literal, Verdict};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: hornlog <problem-file>")?;
    let content =
        std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let (tell, ask) = input::split_tell_ask(&content)?;
    let kb = KnowledgeBase::parse(&tell)?;
    let query = Literal::parse(&ask);

    let outcome = engine::run(&kb, &query);
    match outcome.verdict {
        Verdict::Entailed => println!("YES: {}", outcome.trace.join(", ")),
        Verdict::NotEntailed => println!("NO"),
    }
    Ok(())
}
