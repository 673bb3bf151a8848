use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use aula_test_player::utils::logging;
use aula_test_player::{
    AulaClient, AuthContext, Config, PlayerOutcome, QuestionSetLoader, QuestionSource,
    TestCatalog, TestPlayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config_path = std::env::var("AULA_CONFIG").ok().map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    // 初始化日志
    let level = if config.verbose_logging {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(level);
    logging::log_startup(&config);

    // 命令行给了题库地址就直接播放，否则从测试目录中选择
    let source = match std::env::args().nth(1) {
        Some(locator) => QuestionSource::parse(&locator),
        None => choose_from_catalog(&config).await?,
    };

    let loader = QuestionSetLoader::new(&config);
    let stdin = std::io::stdin();
    let mut player = TestPlayer::new(loader, source, stdin.lock(), std::io::stdout());

    match player.run().await? {
        PlayerOutcome::Finished(summary) => {
            info!("👋 退出，最后成绩 {}", summary.mark);
        }
        PlayerOutcome::Closed => info!("👋 已关闭"),
    }

    Ok(())
}

/// 登录后列出可作答的测试，让用户选择一个
async fn choose_from_catalog(config: &Config) -> Result<QuestionSource> {
    let client = AulaClient::new(config)?;
    let auth = AuthContext::from_config(&client, config).await?;
    logging::log_profile(&auth, chrono::Local::now().date_naive());
    let catalog = TestCatalog::fetch(&client, &auth).await?;

    let tests: Vec<_> = catalog.interactive().collect();
    if tests.is_empty() {
        bail!("No hay simulacros interactivos disponibles");
    }

    let mut stdout = std::io::stdout();
    for (idx, test) in tests.iter().enumerate() {
        writeln!(stdout, "  {}. {}", idx + 1, test.title)?;
        if let Some(description) = &test.description {
            writeln!(stdout, "     {}", description)?;
        }
    }
    write!(stdout, "Elige un test: ")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let choice: usize = line.trim().parse().context("无法解析输入的编号")?;

    let test = choice
        .checked_sub(1)
        .and_then(|idx| tests.get(idx))
        .with_context(|| format!("编号 {} 超出范围", choice))?;

    // interactive() 只返回带 url 的资料
    let url = test.url.as_deref().unwrap_or_default();
    Ok(QuestionSource::parse(&client.resolve_url(url)))
}
