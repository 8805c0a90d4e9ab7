//! Configuration status command.

use anyhow::Result;
use console::style;

use crate::cli::ServeArgs;
use crate::config::DeploymentInfo;

/// Resolved configuration as JSON. The API key is reported as present or absent only.
pub fn status_json(args: &ServeArgs, deployment: &DeploymentInfo) -> serde_json::Value {
    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "listen": args.bind_addr(),
        "environment": args.environment,
        "platform": {
            "name": args.platform_name,
            "on_platform": args.on_platform,
        },
        "storage": {
            "database_configured": args.database_url.is_some(),
        },
        "ai": {
            "api_key_configured": args.has_openai_key(),
            "model": args.openai_model,
            "base_url": args.openai_base_url,
        },
        "store": {
            "max_messages": args.max_messages,
            "retain_messages": args.retain_messages,
            "demo_data": !args.no_demo_data,
        },
        "deployment": deployment,
    })
}

/// Print the resolved configuration.
pub fn status(args: &ServeArgs, deployment: &DeploymentInfo, json: bool) -> Result<()> {
    if json {
        let status = status_json(args, deployment);
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };

    println!();
    println!(
        "  {} CatChat v{}",
        style("🐱").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Server ──").dim());
    println!("  Listen:      {}", style(args.bind_addr()).cyan());
    println!("  Environment: {}", style(&args.environment).bold());
    println!(
        "  Platform:    {} {}",
        args.platform_name,
        check_mark(args.on_platform)
    );
    println!();

    println!("  {}", style("── Store ──").dim());
    println!(
        "  Limits:      truncate above {} down to {}",
        style(args.max_messages).bold(),
        style(args.retain_messages).bold()
    );
    println!("  {} Demo data", check_mark(!args.no_demo_data));
    println!("  {} Database archive", check_mark(args.database_url.is_some()));
    println!();

    println!("  {}", style("── Assistant ──").dim());
    println!("  {} OpenAI API key", check_mark(args.has_openai_key()));
    println!("  Model:       {}", args.openai_model);
    println!();

    println!("  {}", style("── Deployment ──").dim());
    println!("  Service:     {}", deployment.service());
    println!("  Region:      {}", deployment.region());
    println!("  URL:         {}", style(deployment.public_url()).cyan());
    println!();

    Ok(())
}
