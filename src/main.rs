use std::io::{self, BufRead, Write};

use circq::{BufferConfig, RingBuffer};
use tracing_subscriber::EnvFilter;

/// 標準入力を取り込み、バッファに残った行を吐き出す tail 風デモ。
/// Overwrite モードなら直近 capacity 行、Continuous モードなら全行が残る。
fn main() -> anyhow::Result<()> {
    // env-filter 対応の tracing 初期化（ログは stderr、出力は stdout）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = BufferConfig::from_env();
    tracing::info!(
        "circq demo: capacity={} mode={}",
        config.capacity,
        config.grow_mode
    );

    let mut buffer: RingBuffer<String> = RingBuffer::with_config(config);
    for line in io::stdin().lock().lines() {
        buffer.write(line?);
    }
    tracing::debug!("{}", buffer.describe());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    while let Some(line) = buffer.read() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
