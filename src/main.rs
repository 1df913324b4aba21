use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use serde::Deserialize;

use app_permission_groups::core::Observable;
use app_permission_groups::logging;
use app_permission_groups::permissions::{AppPermissionUsage, Category, GroupMap};
use app_permission_groups::runtime::{
    create_event_channel, forward_groups, forward_hibernation, spawn_usage_load,
    StaticUsageSource,
};
use app_permission_groups::screen::{
    AppPermissionGroupsScreen, HibernationSettingState, ScreenActions, ScreenArgs, ScreenModel,
};
use app_permission_groups::ScreenConfig;

/// Everything needed to render one screen offline
#[derive(Debug, Deserialize)]
struct Snapshot {
    args: ScreenArgs,
    #[serde(default)]
    config: ScreenConfig,
    groups: Option<GroupMap>,
    hibernation: Option<HibernationSettingState>,
    #[serde(default)]
    usages: Vec<AppPermissionUsage>,
}

/// Host actions that only log
struct LoggingActions;

impl ScreenActions for LoggingActions {
    fn open_permission_group(&self, args: &ScreenArgs, group_name: &str, category: Category) {
        tracing::info!("open {} ({}) for {}", group_name, category, args.package_name);
    }

    fn view_permission_usage(&self, args: &ScreenArgs, group_name: &str) {
        tracing::info!("view usage of {} for {}", group_name, args.package_name);
    }

    fn show_extra_permissions(&self, args: &ScreenArgs) {
        tracing::info!("show extra permissions for {}", args.package_name);
    }

    fn show_all_permissions(&self, args: &ScreenArgs) {
        tracing::info!("show all permissions for {}", args.package_name);
    }

    fn show_help(&self, _args: &ScreenArgs) {
        tracing::info!("show help");
    }

    fn set_auto_revoke(&self, args: &ScreenArgs, enabled: bool) {
        tracing::info!("set auto-revoke {} for {}", enabled, args.package_name);
    }

    fn show_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn navigate_back(&self) {
        tracing::info!("navigate back");
    }
}

fn print_model(model: &ScreenModel) {
    for section in &model.sections {
        println!("{}", section.category.to_string().to_uppercase().bold());
        for entry in &section.entries {
            match &entry.summary {
                Some(summary) => println!("  {}  {}", entry.title, summary.dimmed()),
                None => println!("  {}", entry.title),
            }
        }
    }

    if let Some(auto_revoke) = &model.auto_revoke {
        let state = if auto_revoke.checked { "on" } else { "off" };
        println!("{} [{}]", auto_revoke.label.bold(), state);
        println!("  {}", auto_revoke.summary.dimmed());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = logging::init_logging()?;

    let path = std::env::args()
        .nth(1)
        .context("usage: app-perms <snapshot.json>")?;
    let content = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    snapshot.config.validate()?;

    tracing::info!("Rendering permissions of {}", snapshot.args.package_name);

    let (tx, mut rx) = create_event_channel();
    let groups = Observable::new();
    let hibernation = Observable::new();
    forward_groups(&groups, tx.clone());
    forward_hibernation(&hibernation, tx.clone());

    let mut screen =
        AppPermissionGroupsScreen::new(snapshot.args, snapshot.config, LoggingActions);

    let source = Arc::new(StaticUsageSource::new(snapshot.usages));
    let _load = spawn_usage_load(source, screen.usage_begin_millis(), tx);

    groups.set(snapshot.groups);
    hibernation.set(snapshot.hibernation);
    drop(groups);
    drop(hibernation);

    screen.run(&mut rx).await?;

    if let Some(model) = screen.model() {
        print_model(model);
    }

    Ok(())
}
