//! korean-audio-gen CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use korean_audio_gen::backend::{Backend, create_backend, locale_of};
use korean_audio_gen::catalog;
use korean_audio_gen::cli::Args;
use korean_audio_gen::engine::{BatchSynthesizer, ItemStatus, RunSummary};
use korean_audio_gen::store::DirStore;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("SPEECH_KEY").ok())
        .context("No API key given. Pass --api-key or set SPEECH_KEY")?;

    let backend = create_backend(&args.endpoint, &api_key);

    if args.list_voices {
        return list_voices(&backend, &args.voice);
    }

    let store = DirStore::new(args.output.clone());
    let engine = BatchSynthesizer::new(backend, store, args.voice.clone());
    let items = catalog::registry();

    run_batch(&engine, &items, &args);

    // Per-item failures are reported in the summary but never change the
    // exit status.
    Ok(())
}

fn list_voices<B: Backend>(backend: &B, voice: &str) -> Result<()> {
    let locale = locale_of(voice);
    let voices = backend.list_voices().context("Failed to list voices")?;

    let mut matched = 0;
    println!("Voices for {locale}:");
    for info in voices {
        if info.locale != locale {
            continue;
        }
        matched += 1;
        print!("  {} ({})", info.short_name, info.display_name);
        if let Some(gender) = &info.gender {
            print!(", {gender}");
        }
        println!();
    }

    if matched == 0 {
        println!("  none reported by the service");
    }

    Ok(())
}

fn run_batch<B: Backend>(
    engine: &BatchSynthesizer<B, DirStore>,
    items: &[&str],
    args: &Args,
) {
    let total = items.len();

    println!("Korean audio generator");
    println!("Output directory: {}", args.output.display());
    println!("Voice: {}", args.voice);
    println!();
    println!("Processing {total} audio files...");
    if args.force {
        println!("Force mode: regenerating all files");
    } else {
        println!("Skipping existing files");
    }
    println!();

    let summary = engine.run(items, args.force, |i, text, status| {
        print!("[{i:>3}/{total}] ");
        match status {
            ItemStatus::Generated => println!("Generated {text} -> {text}.mp3"),
            ItemStatus::Regenerated => println!("Regenerated {text} -> {text}.mp3"),
            ItemStatus::Skipped => println!("Skipping {text}.mp3 (already exists)"),
            ItemStatus::Failed(e) => println!("Error generating {text}.mp3: {e}"),
        }
    });

    print_summary(&summary, args);
}

fn print_summary(summary: &RunSummary, args: &Args) {
    println!();
    println!("Summary:");
    println!("  Generated: {} files", summary.generated);
    println!("  Skipped: {} files", summary.skipped);
    println!("  Failed: {} files", summary.failed);
    println!(
        "  Files in {}: {}",
        args.output.display(),
        summary.files_present
    );

    println!();
    println!("Audio files cover:");
    for (label, list) in catalog::categories() {
        println!("  {} {}", list.len(), label);
    }

    if summary.failed > 0 {
        println!();
        println!(
            "{} files failed to generate. Check the connection to {}.",
            summary.failed, args.endpoint
        );
    }

    if !args.force {
        println!();
        println!("Tip: run with --force to regenerate existing files");
    }
}
