use chrono::{DateTime, FixedOffset};
use onair_core::{
    AppConfig, AppConfigExt, Clock, DisplayZone, FixedClock, OverlayAnchor, Resolution,
    StationKind, SystemClock,
};
use onair_overlay::pipeline;
use std::io::Write;
use std::path::PathBuf;

use crate::CliContext;
use crate::refresher;

/// Run one refresh cycle against the loaded payload file and present it
pub async fn run_refresh(ctx: &CliContext, now: DateTime<FixedOffset>) {
    let sequence = ctx.next_sequence();

    let Some(path) = ctx.payload_path.read().await.clone() else {
        println!("No payload loaded. Use `load --path <file>` first.");
        return;
    };

    let payload = match tokio::fs::read_to_string(&path).await {
        Ok(payload) => payload,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "could not read payload");
            ctx.snapshot.write().await.record_failure(sequence, &error);
            return;
        }
    };

    let (station, overlay) = {
        let config = ctx.config.read().await;
        (config.station().clone(), config.overlay())
    };

    let output = pipeline::refresh(now, &payload, &station, &overlay, DisplayZone::Schedule);
    if !output.diagnostics.is_empty() {
        tracing::info!(
            skipped = output.diagnostics.len(),
            "some schedule entries were skipped"
        );
    }

    let plan = {
        let mut keeper = ctx.snapshot.write().await;
        if !keeper.apply(sequence, output) {
            return;
        }
        keeper.plan().clone()
    };
    ctx.presenter.lock().await.present(sequence, &plan);
}

/// Lay the retained program out again with the current overlay settings
async fn relayout(ctx: &CliContext) {
    let sequence = ctx.next_sequence();
    let overlay = ctx.config.read().await.overlay();
    let plan = ctx.snapshot.write().await.relayout(sequence, &overlay).clone();
    ctx.presenter.lock().await.present(sequence, &plan);
}

pub async fn load_payload(path: &str, ctx: &CliContext) {
    let path = PathBuf::from(path);
    if !path.is_file() {
        println!("Load failed. {} is not a file.", path.display());
        return;
    }

    println!("Loading schedule from {}", path.display());
    *ctx.payload_path.write().await = Some(path);
    run_refresh(ctx, SystemClock.now()).await;
    show_program(ctx).await;

    // Timer restarts so the next automatic refresh is a full interval away
    refresher::restart(ctx).await;
}

pub async fn refresh(now: Option<&str>, ctx: &CliContext) {
    let now = match now {
        Some(timestamp) => match FixedClock::parse(timestamp) {
            Ok(clock) => clock.now(),
            Err(error) => {
                println!("Invalid time '{}': {}", timestamp, error);
                return;
            }
        },
        None => SystemClock.now(),
    };

    run_refresh(ctx, now).await;
    show_program(ctx).await;
}

pub async fn show_program(ctx: &CliContext) {
    let keeper = ctx.snapshot.read().await;
    for line in keeper.view().lines() {
        println!("{}", line);
    }
}

pub async fn show_settings(ctx: &CliContext) {
    let config = ctx.config.read().await;
    let raw = config.raw();
    let overlay = config.overlay();
    let station = config.station();

    println!("{:<20} {}", "Station", station.kind);
    println!("{:<20} {}", "URL", station.api_url);
    println!("{:<20} {} min", "Refresh interval", station.refresh_interval_minutes);
    println!(
        "{:<20} {}",
        "Overlay",
        if overlay.enabled() { "enabled" } else { "disabled" }
    );
    println!("{:<20} {}", "Position", overlay.anchor().label());
    println!("{:<20} {}", "Resolution", overlay.resolution());

    match ctx.payload_path.read().await.as_ref() {
        Some(path) => println!("{:<20} {}", "Payload", path.display()),
        None => println!("{:<20} (none)", "Payload"),
    }
    if raw.overlay_position != overlay.anchor().key() {
        println!("(stored position '{}')", raw.overlay_position);
    }
}

pub async fn toggle_overlay(ctx: &CliContext) {
    if !apply_change(ctx, |config| config.overlay_enabled = !config.overlay_enabled).await {
        return;
    }
    let enabled = ctx.config.read().await.overlay().enabled();
    println!("Overlay {}", if enabled { "enabled" } else { "disabled" });
    relayout(ctx).await;
}

pub async fn set_position(position: &str, ctx: &CliContext) {
    let value = OverlayAnchor::from_key(position)
        .map(|anchor| anchor.key().to_string())
        .unwrap_or_else(|| position.to_string());

    if apply_change(ctx, |config| config.overlay_position = value).await {
        let anchor = ctx.config.read().await.overlay().anchor();
        println!("Overlay position set to {}", anchor.label());
        relayout(ctx).await;
    }
}

pub async fn set_resolution(width: i32, height: i32, ctx: &CliContext) {
    let resolution = Resolution::new(width, height);
    if apply_change(ctx, |config| config.resolution = resolution).await {
        println!("Resolution set to {}", resolution);
        relayout(ctx).await;
    }
}

pub async fn set_interval(minutes: u32, ctx: &CliContext) {
    if apply_change(ctx, |config| config.refresh_interval_minutes = minutes).await {
        println!("Refreshing every {} min", minutes);
        refresher::restart(ctx).await;
    }
}

pub async fn set_station(kind: &str, ctx: &CliContext) {
    let value = StationKind::from_key(kind)
        .map(|kind| kind.key().to_string())
        .unwrap_or_else(|| kind.to_string());

    if apply_change(ctx, |config| config.station_kind = value).await {
        let kind = ctx.config.read().await.station().kind;
        println!("Station set to {}", kind);
    }
}

pub async fn set_url(url: &str, ctx: &CliContext) {
    let url = url.to_string();
    if apply_change(ctx, |config| config.api_url = url).await {
        println!("Station URL updated");
    }
}

pub async fn save(ctx: &CliContext) {
    let raw: AppConfig = ctx.config.read().await.raw().clone();
    match raw.save() {
        Ok(()) => println!("Settings saved"),
        Err(error) => println!("{}", error),
    }
}

pub async fn exit(ctx: &CliContext) {
    refresher::stop(ctx).await;
    ctx.presenter.lock().await.clear();
    println!("quitting...");
    if let Err(error) = std::io::stdout().flush() {
        tracing::warn!(%error, "error flushing stdout");
    }
}

/// Validate and adopt a settings change. Rejected changes are reported and
/// leave the previous settings in effect.
async fn apply_change(ctx: &CliContext, change: impl FnOnce(&mut AppConfig)) -> bool {
    match ctx.config.write().await.modify(change) {
        Ok(()) => true,
        Err(error) => {
            println!("Update failed. {}", error);
            false
        }
    }
}
