mod cli_args;
mod resolve;
mod server;

use std::error::Error;
use std::sync::Arc;

use cli_args::CliArgs;
use configuration::WordserveConfiguration;
use wordlist::{WordIndex, Wordlist};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: CliArgs = argh::from_env();

    let config: WordserveConfiguration = if args.config.exists() {
        configuration::get_config(args.config.clone())?
    } else {
        WordserveConfiguration::default()
    };

    let words_text = std::fs::read_to_string(&config.wordlist.path).map_err(|e| {
        format!(
            "failed to read wordlist {}: {}",
            config.wordlist.path.display(),
            e
        )
    })?;
    let words = Wordlist::from_text(&words_text);
    if words.len() < wordlist::FULL_LIST_LEN {
        tracing::warn!(
            "wordlist has {} words, {} are needed to name every address",
            words.len(),
            wordlist::FULL_LIST_LEN,
        );
    }

    if let Some(domain) = args.translate {
        let name = translate(&domain, &words, &config).await?;
        println!("{}", name);
        return Ok(());
    }

    if args.serve {
        let index = Arc::new(WordIndex::new(&words));
        server::run(config.server.bind_address(), index).await?;
        return Ok(());
    }

    eprintln!("nothing to do: pass -s to serve, or -t <domain> to translate");
    Ok(())
}

async fn translate(
    domain: &str,
    words: &Wordlist,
    config: &WordserveConfiguration,
) -> Result<String, Box<dyn Error>> {
    let addr = resolve::resolve_v4(config.dns.server_address, domain)
        .await?
        .ok_or_else(|| format!("couldn't find IPv4 address for domain: {}", domain))?;

    tripleword::addr_to_name(u32::from(addr), words)
        .ok_or_else(|| format!("wordlist is too short to name {}", addr).into())
}
