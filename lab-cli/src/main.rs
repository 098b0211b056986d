//! plab CLI: browse problem/tool catalogs, manage prompt templates, run one
//! generation at a time, review history. Config from env and optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use generator::{
    CostTracker, GenerationResult, Generator, LabConfig, ModelClient, PromptRequest,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
use lab_cli::listing::{filter_problems, filter_tools, preview};
use lab_cli::report::{comparison_report, text_export};
use lab_cli::{Cli, Commands};
use prompt::DEFAULT_SYSTEM_PROMPT;
use std::path::PathBuf;
use std::sync::Arc;
use storage::{CatalogStore, DataPaths, ResultStore, TemplateStore, TestConfig, TestRecord};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let paths = data_paths(cli.data_dir);
    paths.ensure().context("Create data directories")?;

    match cli.command {
        Commands::Problems { domain, level } => handle_problems(&paths, domain, level),
        Commands::Tools { category } => handle_tools(&paths, category),
        Commands::Templates => handle_templates(&paths),
        Commands::SaveTemplate {
            name,
            system_file,
            user_file,
        } => handle_save_template(&paths, &name, &system_file, user_file.as_deref()),
        Commands::Generate {
            problem,
            tools,
            template,
            temperature,
            max_tokens,
        } => handle_generate(&paths, &problem, &tools, template, temperature, max_tokens).await,
        Commands::History { limit } => handle_history(&paths, limit),
        Commands::Compare { first, second } => handle_compare(&paths, &first, &second),
        Commands::Export { test_id, out } => handle_export(&paths, &test_id, out.as_deref()),
    }
}

/// Data root: `--data-dir` beats `LAB_DATA_DIR` beats `./data`.
fn data_paths(arg: Option<PathBuf>) -> DataPaths {
    let root = arg.unwrap_or_else(|| {
        std::env::var("LAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"))
    });
    DataPaths::new(root)
}

fn handle_problems(paths: &DataPaths, domain: Option<String>, level: Option<i64>) -> Result<()> {
    let problems = CatalogStore::new(paths).load_problems()?;
    let problems = filter_problems(problems, domain.as_deref(), level);

    if problems.is_empty() {
        println!("No problems found (dir: {}).", paths.problems.display());
        return Ok(());
    }

    println!("{:<20} {:<14} {:<6} {}", "problem_id", "domain", "level", "text");
    println!("{}", "-".repeat(96));
    for problem in &problems {
        println!(
            "{:<20} {:<14} {:<6} {}",
            problem.problem_id,
            problem.domain,
            problem.level,
            preview(&problem.problem_text, 50)
        );
    }
    Ok(())
}

fn handle_tools(paths: &DataPaths, category: Option<String>) -> Result<()> {
    let tools = CatalogStore::new(paths).load_tools()?;
    let tools = filter_tools(tools, category.as_deref());

    if tools.is_empty() {
        println!("No tools found (dir: {}).", paths.tools.display());
        return Ok(());
    }

    println!("{:<24} {:<28} {}", "tool_id", "name", "category");
    println!("{}", "-".repeat(72));
    for tool in &tools {
        println!("{:<24} {:<28} {}", tool.tool_id(), tool.name(), tool.category());
    }
    Ok(())
}

fn handle_templates(paths: &DataPaths) -> Result<()> {
    let templates = TemplateStore::new(paths).load();

    if templates.is_empty() {
        println!("No saved templates.");
        return Ok(());
    }

    for (name, entry) in &templates {
        println!("{name}");
        println!("  system: {}", preview(&entry.system, 60));
        if entry.user.is_empty() {
            println!("  user:   (default template)");
        } else {
            println!("  user:   {}", preview(&entry.user, 60));
        }
    }
    Ok(())
}

fn handle_save_template(
    paths: &DataPaths,
    name: &str,
    system_file: &std::path::Path,
    user_file: Option<&std::path::Path>,
) -> Result<()> {
    let system = std::fs::read_to_string(system_file)
        .with_context(|| format!("Read system prompt from {}", system_file.display()))?;
    let user = match user_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Read user template from {}", path.display()))?,
        None => String::new(),
    };

    TemplateStore::new(paths).save(name, &system, &user)?;
    println!("Saved template `{name}`.");
    Ok(())
}

async fn handle_generate(
    paths: &DataPaths,
    problem_id: &str,
    tool_ids: &[String],
    template: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
) -> Result<()> {
    let config = LabConfig::from_env()?;

    let catalog = CatalogStore::new(paths);
    let problem = catalog
        .load_problems()?
        .into_iter()
        .find(|problem| problem.problem_id == problem_id)
        .with_context(|| {
            format!(
                "Problem `{problem_id}` not found in {}",
                paths.problems.display()
            )
        })?;

    let tools = catalog.load_tools_by_id(tool_ids)?;
    if tools.is_empty() {
        anyhow::bail!("None of the requested tools could be loaded (dir: {}).", paths.tools.display());
    }

    let (system_prompt, user_prompt_template) =
        resolve_template(&TemplateStore::new(paths), template.as_deref())?;

    let client = match &config.base_url {
        Some(base_url) => ModelClient::with_base_url(config.api_key.clone(), base_url.clone()),
        None => ModelClient::new(config.api_key.clone()),
    };
    let generator = Generator::from_config(Arc::new(client), &config);

    let loaded_tool_ids: Vec<String> = tools.iter().map(|tool| tool.tool_id()).collect();
    let request = PromptRequest {
        problem_text: problem.problem_text.clone(),
        tools,
        system_prompt,
        user_prompt_template,
        temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
        max_tokens: max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
    };

    let mut tracker = CostTracker::new();
    let result = generator.generate(&request).await?;
    tracker.add_test(result.metadata.tokens, result.metadata.cost_usd);

    print_result(&result);

    let record = TestRecord::new(
        result,
        TestConfig {
            problem_id: problem.problem_id,
            problem_text: problem.problem_text,
            domain: problem.domain,
            level: problem.level,
            tools: loaded_tool_ids,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        },
    );
    let path = ResultStore::new(paths).save(&record)?;
    println!("Saved test record to {}", path.display());

    println!(
        "Session: {} test(s), {} tokens, ${:.4}",
        tracker.test_count(),
        tracker.total_tokens(),
        tracker.total_cost()
    );
    Ok(())
}

/// Resolves the system prompt and user template: a saved template by name, or
/// the built-in defaults. Empty fields in a saved template fall back to the
/// defaults too.
fn resolve_template(
    store: &TemplateStore,
    name: Option<&str>,
) -> Result<(String, Option<String>)> {
    let Some(name) = name else {
        return Ok((DEFAULT_SYSTEM_PROMPT.to_string(), None));
    };

    let mut templates = store.load();
    let entry = templates
        .remove(name)
        .with_context(|| format!("Template `{name}` not found; see `plab templates`"))?;

    let system = if entry.system.is_empty() {
        DEFAULT_SYSTEM_PROMPT.to_string()
    } else {
        entry.system
    };
    let user = if entry.user.is_empty() {
        None
    } else {
        Some(entry.user)
    };
    Ok((system, user))
}

fn print_result(result: &GenerationResult) {
    if result.solutions.len() != 5 {
        println!(
            "Note: expected 5 solutions, the model returned {}.\n",
            result.solutions.len()
        );
    }

    for (index, solution) in result.solutions.iter().enumerate() {
        println!("{}. {}", index + 1, solution.title);
        println!("   {}", solution.prompt);
        if !solution.tools_used.is_empty() {
            println!("   Tools: {}", solution.tools_used.join(", "));
        }
        if !solution.tags.is_empty() {
            println!("   Tags: {}", solution.tags.join(", "));
        }
        println!();
    }

    let metadata = &result.metadata;
    println!("Model: {}  Temperature: {}", metadata.model, metadata.temperature);
    println!(
        "Tokens: {} in / {} out / {} total",
        metadata.input_tokens, metadata.output_tokens, metadata.tokens
    );
    println!(
        "Cost: ${:.4}  Latency: {:.0} ms",
        metadata.cost_usd, metadata.latency_ms
    );
}

fn handle_compare(paths: &DataPaths, first_id: &str, second_id: &str) -> Result<()> {
    if first_id == second_id {
        anyhow::bail!("Pick two different test ids to compare.");
    }

    let store = ResultStore::new(paths);
    let first = store
        .find_by_id(first_id)
        .with_context(|| format!("Load test record `{first_id}`"))?;
    let second = store
        .find_by_id(second_id)
        .with_context(|| format!("Load test record `{second_id}`"))?;

    print!("{}", comparison_report(&first, &second));
    Ok(())
}

fn handle_export(paths: &DataPaths, test_id: &str, out: Option<&std::path::Path>) -> Result<()> {
    let record = ResultStore::new(paths)
        .find_by_id(test_id)
        .with_context(|| format!("Load test record `{test_id}`"))?;
    let text = text_export(&record);

    match out {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Write export to {}", path.display()))?;
            println!("Exported test record to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn handle_history(paths: &DataPaths, limit: usize) -> Result<()> {
    let history = ResultStore::new(paths).load_history(limit)?;

    if history.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    println!("Showing {} recent test(s)\n", history.len());
    for (index, test) in history.iter().enumerate() {
        println!(
            "{}. {} - {} (${:.4}, {} tokens)",
            index + 1,
            test.timestamp.format("%Y-%m-%d %H:%M:%S"),
            test.config.problem_id,
            test.metadata.cost_usd,
            test.metadata.tokens
        );
        println!("   id: {}", test.test_id);
        for (solution_index, solution) in test.results.solutions.iter().enumerate() {
            println!("   {}. {}", solution_index + 1, solution.title);
        }
        println!();
    }
    Ok(())
}
