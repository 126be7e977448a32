// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::bail;
use clap::Parser;
use scanrs::cli::args::Args;
use scanrs::cli::{loader, output};
use scanrs::config::Settings;
use scanrs::scanner::Scanner;
use scanrs::utils::telemetry;
use std::time::Duration;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化组件、启动扫描并渲染结果流
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration and arguments
    let settings = Settings::new()?;
    let args = Args::parse();

    let targets = loader::load_targets(args.url.as_deref(), args.url_file.as_deref())?;
    if targets.is_empty() {
        bail!("no targets supplied, use -u or --url-file");
    }

    let dict = loader::load_dict(&args.dict)?;
    let headers = loader::parse_headers(&args.headers);
    let threads = args.threads.unwrap_or(settings.scanner.threads);
    let timeout = Duration::from_millis(args.timeout.unwrap_or(settings.scanner.timeout_ms));

    info!(
        "Scanning {} targets with {} dictionary entries",
        targets.len(),
        dict.len()
    );

    // 3. Start the scanner and drain the result stream
    let total = targets.len() * dict.len();
    let mut scanner = Scanner::new(targets, dict, threads, timeout, headers)?;
    scanner.start();

    let mut done = 0usize;
    while let Some(result) = scanner.next_result().await {
        done += 1;
        // 404不单独输出，仅计入进度
        if result.status_code != 404 {
            println!("{}", output::render_result(&result));
        }
        if done <= total {
            eprintln!("{}", output::render_progress(done, total));
        }
    }

    scanner.stop();
    info!("Scan finished: {} results", done);
    Ok(())
}
