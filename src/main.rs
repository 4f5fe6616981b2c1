use clap::Parser;
use job_aggregator::utils::{logger, validation::Validate};
use job_aggregator::{
    CliConfig, HeadHunterClient, LocalStorage, PaginationDriver, ProviderClient,
    ProviderSelection, SuperjobClient, Vacancy, VacancyStore,
};
use std::io::{BufRead, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting job-aggregator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut clients: Vec<Box<dyn ProviderClient>> = Vec::new();
    if matches!(
        config.provider,
        ProviderSelection::Headhunter | ProviderSelection::Both
    ) {
        clients.push(Box::new(HeadHunterClient::new(
            config.keyword.as_str(),
            config.hh_base_url.as_str(),
        )));
    }
    if matches!(
        config.provider,
        ProviderSelection::Superjob | ProviderSelection::Both
    ) {
        let api_key = match config.superjob_api_key() {
            Ok(key) => key,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        clients.push(Box::new(SuperjobClient::new(
            config.keyword.as_str(),
            api_key,
            config.sj_base_url.as_str(),
        )));
    }

    // A failed provider keeps its already-fetched pages; the other
    // provider is driven regardless.
    let driver = PaginationDriver::new(config.pages);
    let mut merged: Vec<Vacancy> = Vec::new();
    for client in &mut clients {
        if let Err(e) = driver.run(client.as_mut()).await {
            tracing::error!("{}: pagination aborted: {}", client.label(), e);
            eprintln!("{}: {}", client.label(), e);
        }
        match client.normalize() {
            Ok(vacancies) => {
                tracing::info!("{}: {} vacancies normalized", client.label(), vacancies.len());
                merged.extend(vacancies);
            }
            Err(e) => {
                tracing::error!("{}: normalization failed: {}", client.label(), e);
                eprintln!("{}: {}", client.label(), e);
            }
        }
    }

    let store = VacancyStore::new(LocalStorage::new(config.data_dir.clone()));
    store.insert(&config.keyword, &merged).await?;
    println!("Stored {} vacancies for \"{}\"", merged.len(), config.keyword);

    command_loop(&store, &config.keyword).await
}

async fn command_loop(store: &VacancyStore<LocalStorage>, keyword: &str) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        println!();
        println!("1 - list all vacancies");
        println!("2 - sort by minimum salary, ascending");
        println!("3 - sort by minimum salary, descending");
        println!("4 <position> - delete the vacancy at a position (list order)");
        println!("exit - quit");
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim();

        let listing = match command {
            "exit" => break,
            "1" => store.select(keyword).await.map(Some),
            "2" => store.sorted_by_salary_asc(keyword).await.map(Some),
            "3" => store.sorted_by_salary_desc(keyword).await.map(Some),
            _ if command == "4" || command.starts_with("4 ") => {
                match command[1..].trim().parse::<usize>() {
                    Ok(position) => store.delete_at(keyword, position).await.map(|()| None),
                    Err(_) => {
                        println!("Usage: 4 <position>");
                        continue;
                    }
                }
            }
            _ => {
                println!("Unknown command: {}", command);
                continue;
            }
        };

        match listing {
            Ok(Some(vacancies)) => {
                for (position, vacancy) in vacancies.iter().enumerate() {
                    println!("[{}] {}", position, vacancy);
                    println!();
                }
            }
            Ok(None) => println!("Deleted."),
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}
