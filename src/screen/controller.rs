//! App permissions screen controller
//!
//! Owns the latest state from every source and rebuilds the [`ScreenModel`]
//! from scratch whenever one of them changes. Everything here runs on the
//! thread that owns the screen.

use std::sync::Arc;

use super::actions::{MenuItem, ScreenActions, ScreenArgs};
use super::auto_revoke::{build_auto_revoke, HibernationSettingState};
use super::builder::CategoryListBuilder;
use super::model::{EntryAction, ScreenModel};
use super::telemetry::{new_view_id, view_log_entries};
use crate::config::ScreenConfig;
use crate::core::{Clock, ScreenError, ScreenResult, SystemClock};
use crate::locale::Collator;
use crate::permissions::{
    lookback_begin_millis, AppPermissionUsage, Category, GroupMap, UsageRecords,
};
use crate::runtime::{EventReceiver, ScreenEvent};

/// The permission groups screen of one app
pub struct AppPermissionGroupsScreen<A: ScreenActions> {
    args: ScreenArgs,
    config: ScreenConfig,
    actions: A,
    clock: Arc<dyn Clock>,
    collator: Collator,

    groups: Option<GroupMap>,
    hibernation: Option<HibernationSettingState>,
    usages: Vec<AppPermissionUsage>,
    usage_records: UsageRecords,

    model: Option<ScreenModel>,
    first_load: bool,
}

impl<A: ScreenActions> AppPermissionGroupsScreen<A> {
    /// Create a screen with the system clock
    pub fn new(args: ScreenArgs, config: ScreenConfig, actions: A) -> Self {
        Self {
            args,
            config,
            actions,
            clock: Arc::new(SystemClock),
            collator: Collator::new(),
            groups: None,
            hibernation: None,
            usages: Vec::new(),
            usage_records: UsageRecords::new(),
            model: None,
            first_load: true,
        }
    }

    /// Replace the clock
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Screen arguments
    pub fn args(&self) -> &ScreenArgs {
        &self.args
    }

    /// Screen configuration
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// The host actions sink
    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// Last rendered model, `None` before the first groups update
    pub fn model(&self) -> Option<&ScreenModel> {
        self.model.as_ref()
    }

    /// Usage records used by the last render
    pub fn usage_records(&self) -> &UsageRecords {
        &self.usage_records
    }

    /// Start of the usage window to request from the usage source
    pub fn usage_begin_millis(&self) -> i64 {
        lookback_begin_millis(&self.clock.now(), self.config.lookback_days)
    }

    /// Apply one event from the channel
    ///
    /// Only an invalid package is an error; a failed usage load is logged and
    /// the screen keeps its current usage data.
    pub fn handle_event(&mut self, event: ScreenEvent) -> ScreenResult<()> {
        match event {
            ScreenEvent::GroupsChanged(groups) => {
                self.on_groups_changed(groups)?;
            }
            ScreenEvent::HibernationChanged(state) => {
                self.on_hibernation_changed(state);
            }
            ScreenEvent::UsagesLoaded(Ok(usages)) => {
                self.on_usages_loaded(usages);
            }
            ScreenEvent::UsagesLoaded(Err(e)) => {
                tracing::warn!("Usage load for {} failed: {}", self.args.package_name, e);
            }
        }
        Ok(())
    }

    /// Apply every event already queued, without waiting
    ///
    /// Returns how many events were applied.
    pub fn drain_events(&mut self, rx: &mut EventReceiver) -> ScreenResult<usize> {
        let mut applied = 0;
        while let Ok(event) = rx.try_recv() {
            self.handle_event(event)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Apply events until every sender is dropped
    pub async fn run(&mut self, rx: &mut EventReceiver) -> ScreenResult<()> {
        while let Some(event) = rx.recv().await {
            self.handle_event(event)?;
        }
        tracing::debug!("Event channel closed for {}", self.args.package_name);
        Ok(())
    }

    /// New groups-by-category value
    ///
    /// `None` means the package is gone: the host shows an error and closes
    /// the screen.
    pub fn on_groups_changed(&mut self, groups: Option<GroupMap>) -> ScreenResult<&ScreenModel> {
        let Some(groups) = groups else {
            tracing::warn!("invalid package {}", self.args.package_name);
            self.actions.show_error(&self.config.strings.app_not_found);
            self.actions.navigate_back();
            return Err(ScreenError::AppNotFound(self.args.package_name.clone()));
        };

        self.groups = Some(groups);
        Ok(self.refresh())
    }

    /// New hibernation state; only the auto-revoke section is rebuilt
    pub fn on_hibernation_changed(
        &mut self,
        state: Option<HibernationSettingState>,
    ) -> Option<&ScreenModel> {
        let state = state?;
        self.hibernation = Some(state);

        let model = self.model.as_mut()?;
        model.auto_revoke = self.hibernation.as_ref().and_then(|s| {
            build_auto_revoke(
                s,
                model.section(Category::Allowed),
                &self.config.strings,
                &self.collator,
            )
        });
        self.model.as_ref()
    }

    /// Usage history arrived from the background load
    ///
    /// An empty batch keeps the previous usage data.
    pub fn on_usages_loaded(&mut self, usages: Vec<AppPermissionUsage>) -> Option<&ScreenModel> {
        if usages.is_empty() {
            return self.model.as_ref();
        }

        self.usages = usages;
        if self.groups.is_none() {
            return None;
        }
        Some(self.refresh())
    }

    fn refresh(&mut self) -> &ScreenModel {
        let now = self.clock.now();
        let begin = lookback_begin_millis(&now, self.config.lookback_days);
        self.usage_records
            .rebuild(&self.usages, &self.args.package_name, begin);

        let empty = GroupMap::new();
        let groups = self.groups.as_ref().unwrap_or(&empty);
        let sections =
            CategoryListBuilder::new(&self.config, &self.args).build(groups, &self.usage_records, now);

        let mut model = ScreenModel {
            sections,
            auto_revoke: None,
        };
        model.auto_revoke = self.hibernation.as_ref().and_then(|s| {
            build_auto_revoke(
                s,
                model.section(Category::Allowed),
                &self.config.strings,
                &self.collator,
            )
        });

        tracing::debug!(
            "Rendered {} sections for {}",
            model.sections.len(),
            self.args.package_name
        );

        if self.first_load {
            self.log_view(&model);
            self.first_load = false;
        }

        self.model.insert(model)
    }

    fn log_view(&self, model: &ScreenModel) {
        let view_id = new_view_id();
        for entry in view_log_entries(model, &self.args, view_id) {
            tracing::info!(
                session_id = entry.session_id,
                view_id = entry.view_id,
                group = %entry.group_name,
                package = %entry.package_name,
                category = ?entry.category,
                "App permissions view logged"
            );
            self.actions.record_view(&entry);
        }
    }

    /// Run the action of a tapped entry. Returns false for non-actions.
    pub fn activate(&self, action: &EntryAction) -> bool {
        match action {
            EntryAction::None => false,
            EntryAction::OpenGroup {
                group_name,
                category,
            } => {
                self.actions
                    .open_permission_group(&self.args, group_name, *category);
                true
            }
            EntryAction::ShowExtraPermissions(args) => {
                self.actions.show_extra_permissions(args);
                true
            }
            EntryAction::ViewPermissionUsage { group_name } => {
                self.actions.view_permission_usage(&self.args, group_name);
                true
            }
        }
    }

    /// Flip the auto-revoke switch
    ///
    /// Ignored while the section is hidden or the switch is locked; the
    /// new state arrives later through the hibernation source.
    pub fn set_auto_revoke(&self, enabled: bool) -> bool {
        let editable = self
            .model
            .as_ref()
            .and_then(|m| m.auto_revoke.as_ref())
            .map(|s| s.enabled)
            .unwrap_or(false);

        if !editable {
            return false;
        }
        self.actions.set_auto_revoke(&self.args, enabled);
        true
    }

    /// Options menu entries; only the system screen has any
    pub fn menu_items(&self) -> Vec<MenuItem> {
        if self.args.is_system_screen {
            vec![MenuItem::AllPermissions, MenuItem::Help]
        } else {
            Vec::new()
        }
    }

    /// Handle an options menu selection
    pub fn on_menu_item(&self, item: MenuItem) -> bool {
        if !self.menu_items().contains(&item) {
            return false;
        }
        match item {
            MenuItem::AllPermissions => self.actions.show_all_permissions(&self.args),
            MenuItem::Help => self.actions.show_help(&self.args),
        }
        true
    }
}

impl<A: ScreenActions> std::fmt::Debug for AppPermissionGroupsScreen<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppPermissionGroupsScreen")
            .field("args", &self.args)
            .field("has_groups", &self.groups.is_some())
            .field("usage_records", &self.usage_records.len())
            .field("first_load", &self.first_load)
            .finish()
    }
}
