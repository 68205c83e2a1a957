use std::collections::BTreeMap;

use kiosk::screens::UsageScreen;
use kiosk::{Config, FaceVerdict, Kiosk, print_banner, setup_environment};
use seat_client::HttpSeatRepository;
use shared::seat::{LayoutSheet, parse_end_time_map};

/// Usage board from `LAYOUT_SHEET`, when configured.
async fn offline_board(config: &Config) -> anyhow::Result<Option<UsageScreen>> {
    let Some(path) = &config.layout_sheet else {
        return Ok(None);
    };
    let sheet = LayoutSheet::parse(&tokio::fs::read_to_string(path).await?);
    let end_times = match &config.end_times {
        Some(path) => parse_end_time_map(&tokio::fs::read_to_string(path).await?),
        None => BTreeMap::new(),
    };

    for index in 0..sheet.table_count() {
        tracing::debug!(index, lock = ?sheet.lock_for(index), "Sheet table");
    }
    tracing::info!(path = %path, seats = sheet.seat_count(), "Using layout sheet");
    Ok(Some(UsageScreen::from_sheet(&sheet, &end_times)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, config, logging
    let config = setup_environment()?;
    print_banner();

    tracing::info!(
        tables = %config.client.tables_url,
        timeout_secs = config.client.timeout,
        "Seat kiosk starting..."
    );

    // 2. Seat server
    let repository = HttpSeatRepository::new(&config.client)?;
    let kiosk = Kiosk::new(repository);

    // 3. Current board, from the sheet file or the server
    let screen = match offline_board(&config).await? {
        Some(screen) => screen,
        None => kiosk.usage_screen().await?,
    };
    for row in screen.rows() {
        tracing::info!(
            table = %row.letter,
            table_id = row.table_id,
            kind = row.table_type.as_wire(),
            layout = %row.layout.code,
            labels = ?row.layout.labels,
            "Table"
        );
    }

    // 4. Optional: identify a face crop given on the command line
    if let Some(path) = std::env::args().nth(1) {
        let jpeg = tokio::fs::read(&path).await?;
        match kiosk.identify(jpeg).await? {
            FaceVerdict::Identified { user_id, .. } => {
                let plan = kiosk.plan_cancel(&user_id).await?;
                tracing::info!(user_id = %user_id, ?plan, "Current usage");
            }
            other => tracing::warn!(verdict = ?other, "No usable identity"),
        }
    }

    Ok(())
}
