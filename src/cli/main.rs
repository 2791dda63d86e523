#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::time::Duration;

use clap::Parser;
use crossbeam::channel::bounded;
use resolvent::{builder::ParserInfo, context::Context, reports::Report};

mod config;
mod read;

use config::{Args, CliConfig, TraceFormat};

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    #[cfg(feature = "log")]
    init_logging();

    let (config, cli_config) = CliConfig::from_args(args);

    let mut ctx = Context::from_config(config);

    let info = match read::read_problem(&cli_config.problem_file, &mut ctx) {
        Ok(info) => info,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let ctx = match cli_config.time_limit {
        None => {
            ctx.saturate();
            ctx
        }

        Some(limit) => match saturate_within(ctx, limit) {
            Some(ctx) => ctx,
            None => {
                println!("c Time limit of {}s reached", limit.as_secs());
                println!("{}", Report::Unknown.verdict());
                std::process::exit(3);
            }
        },
    };

    if cli_config.stats {
        print_stats(&ctx, &info);
    }

    if !cli_config.proof && cli_config.format == TraceFormat::Text {
        if let Err(e) = ctx.write_trace(&mut std::io::stdout().lock()) {
            eprintln!("c Failed to write trace: {e}");
            std::process::exit(1);
        }
        return;
    }

    let trace = match cli_config.proof {
        true => ctx.proof_trace(),
        false => ctx.trace(),
    };

    match cli_config.format {
        TraceFormat::Text => println!("{trace}"),

        TraceFormat::Json => match trace.as_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                println!("c Failed to write trace: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Saturates the context on a worker, abandoning the worker if saturation does not end within `limit`.
fn saturate_within(mut ctx: Context, limit: Duration) -> Option<Context> {
    let (tx, rx) = bounded::<Context>(1);

    std::thread::spawn(move || {
        ctx.saturate();
        let _ = tx.send(ctx);
    });

    rx.recv_timeout(limit).ok()
}

fn print_stats(ctx: &Context, info: &ParserInfo) {
    println!("c Premises:           {}", info.premises);
    println!("c Goal literals:      {}", info.goal_literals);
    println!("c Atoms:              {}", info.atoms);
    println!("c Input clauses:      {}", info.added_clauses);
    println!("c Clauses:            {}", ctx.clause_db.count());
    println!("c Pairs examined:     {}", ctx.counters.pairs_examined);
    println!("c Resolvents:         {}", ctx.counters.resolvents);
    println!("c Duplicates:         {}", ctx.counters.duplicates);
    println!("c Tautologies:        {}", ctx.counters.tautologies);
    println!("c Time:               {:.2?}", ctx.counters.time);
    println!("c Outcome:            {}", ctx.report());
}

/// Logs are written to stderr, filtered by the level set in `RESOLVENT_LOG` (by default, `warn`).
#[cfg(feature = "log")]
fn init_logging() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let level = std::env::var("RESOLVENT_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Warn);

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} {t} {m}{n}")))
        .build();

    let config = match log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c Failed to configure logging: {e}");
            return;
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        eprintln!("c Failed to initialise logging: {e}");
    }
}
