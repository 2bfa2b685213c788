use anyhow::Result;

use encore::config::EncoreConfig;
use encore::retrieval::{create_retriever, format_docs, DocumentRetriever};

/// Run one retrieval from the terminal and print what the model would see.
pub async fn search(config: &EncoreConfig, query: &str) -> Result<()> {
    let retriever = create_retriever(&config.retrieval)?;
    let passages = retriever.search(query).await?;

    if passages.is_empty() {
        eprintln!("No passages found.");
    } else {
        eprintln!("Found {} passage(s).\n", passages.len());
    }

    print!("{}", format_docs(&passages));
    Ok(())
}
