//! CLI runner - executes commands

use crate::batch::Batcher;
use crate::cli::commands::{Cli, Commands};
use crate::config::JobConfig;
use crate::dispatch::KinesisSink;
use crate::error::Result;
use crate::job::IngestJob;
use crate::secrets::EnvSecretStore;
use crate::source::{JsonFileSource, RecordSource};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run => self.run_job().await,
            Commands::Plan => self.plan().await,
            Commands::Validate => self.validate(),
        }
    }

    /// Load the job config, apply CLI overrides, validate
    fn load_config(&self) -> Result<JobConfig> {
        let mut config = match &self.cli.config {
            Some(path) => JobConfig::load(path)?,
            None => JobConfig::default(),
        };

        if let Some(input) = &self.cli.input {
            config.input = input.clone();
        }
        if let Some(stream) = &self.cli.stream {
            config.stream = stream.clone();
        }
        if let Some(region) = &self.cli.region {
            config.region = region.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Execute the ingestion run
    async fn run_job(&self) -> Result<()> {
        let config = self.load_config()?;
        let source = JsonFileSource::parse(&config.input)?;
        let secrets = EnvSecretStore::new();
        let sink = KinesisSink::connect(&config, &secrets).await?;

        let report = IngestJob::new(&config, &source, &sink).run().await?;

        println!(
            "Data uploaded successfully to Kinesis stream: {}",
            config.stream
        );
        println!("Total records sent: {}", report.records_sent);
        tracing::info!(
            records = report.records_sent,
            batches = report.batches_sent,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "run finished"
        );

        Ok(())
    }

    /// Read and batch without submitting; print the batch plan
    async fn plan(&self) -> Result<()> {
        let config = self.load_config()?;
        let source = JsonFileSource::parse(&config.input)?;

        let records = source.read_all().await?;
        let batcher = Batcher::from_config(&config)?;
        let batches = batcher.batches(&records).collect::<Result<Vec<_>>>()?;

        println!("Input: {}", config.input);
        println!("Records: {}", records.len());
        println!(
            "Batches: {} (batch size {})",
            batches.len(),
            config.batch_size
        );
        if let Some(last) = batches.last() {
            println!("Final batch size: {}", last.len());
        }
        println!("Destination: {} ({})", config.stream, config.region);
        println!("Nothing submitted (plan only).");

        Ok(())
    }

    /// Validate the configuration and print a summary
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;

        println!("Configuration OK");
        println!("  input: {}", config.input);
        println!("  stream: {}", config.stream);
        println!("  region: {}", config.region);
        println!("  batch_size: {}", config.batch_size);
        println!("  partition_field: {}", config.partition_field);
        match &config.secrets {
            Some(sec) => println!("  credentials: secret scope '{}'", sec.scope),
            None => println!("  credentials: ambient AWS credential chain"),
        }

        Ok(())
    }
}
