//! Window sweep: how often you end up with the best candidate, per search window.
//!
//! Compares candidates who always accept against candidates who say yes half
//! the time, over every window `1..N`.
//!
//! Run with:
//!   cargo run --release --example window_sweep
//!   RUST_LOG=secretary=debug cargo run --release --example window_sweep

use secretary::{sweep_windows, AcceptancePolicy, SweepConfig};
use tracing_subscriber::EnvFilter;

fn main() -> secretary::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("secretary=info")),
        )
        .init();

    let n = 200;
    let base = SweepConfig::new(n).with_trials(2_000).with_seed(42);

    let always = sweep_windows(&base)?;
    let fickle = sweep_windows(&base.clone().with_policy(AcceptancePolicy::new(0.5, 0.0)?))?;

    println!("Population: {n}");
    println!(
        "{:>6}  {:>8} {:>8} {:>8} {:>9}   {:>8} {:>8} {:>8} {:>9}",
        "window", "best", "top5%", "top10%", "avg seen", "best", "top5%", "top10%", "avg seen"
    );
    println!("{:>6}  {:-^36}   {:-^36}", "", " p_accept=1 ", " p_accept=0.5 ");
    for (a, f) in always.points.iter().zip(&fickle.points) {
        // Every 10th window keeps the table readable.
        if a.window % 10 != 0 {
            continue;
        }
        println!(
            "{:>6}  {:>8.3} {:>8.3} {:>8.3} {:>9.1}   {:>8.3} {:>8.3} {:>8.3} {:>9.1}",
            a.window,
            a.summary.p_best,
            a.summary.p_top5,
            a.summary.p_top10,
            a.summary.mean_stop,
            f.summary.p_best,
            f.summary.p_top5,
            f.summary.p_top10,
            f.summary.mean_stop,
        );
    }

    for (label, sweep) in [("p_accept=1", &always), ("p_accept=0.5", &fickle)] {
        if let Some(best) = sweep.best_window() {
            println!(
                "{label}: best window {} ({:.1}% of population), p_best {:.3}",
                best.window,
                100.0 * best.window as f64 / n as f64,
                best.summary.p_best
            );
        }
    }
    Ok(())
}
