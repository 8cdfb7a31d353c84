//! # Bootstrap: start every section from one scheduling point
//!
//! [`Bootstrap::sections`] turns the three sections into independent
//! `'static` local futures, each owning its target plus clones of the client,
//! the item style and the activity log. They share no mutable state, so any
//! interleaving of their suspension points is safe.
//!
//! - [`Bootstrap::start`] hands each future to a spawner and returns at once.
//!   The page passes Dioxus `spawn`; nothing waits for the sections.
//! - [`Bootstrap::run`] drives all three to completion on the current task, for
//!   callers that need to know every section has settled.

use futures::future::{join_all, LocalBoxFuture};
use futures::FutureExt;

use api::{ApiClient, Transport};

use crate::activity_log::{ActivityLog, LogLevel};
use crate::render::ItemStyle;
use crate::sections::{health_section, items_section, users_section};
use crate::target::{ListTarget, TextTarget};

/// The page locations the sections write into.
pub struct RenderTargets<V, U, I> {
    pub version: V,
    pub users: U,
    pub items: I,
}

/// Everything the sections need, minus the targets.
#[derive(Clone)]
pub struct Bootstrap<T: Transport> {
    client: ApiClient<T>,
    item_style: ItemStyle,
    log: ActivityLog,
}

impl<T> Bootstrap<T>
where
    T: Transport + Clone + 'static,
{
    pub fn new(client: ApiClient<T>, item_style: ItemStyle, log: ActivityLog) -> Self {
        Self {
            client,
            item_style,
            log,
        }
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// One future per section, in no particular order of completion.
    pub fn sections<V, U, I>(
        &self,
        targets: RenderTargets<V, U, I>,
    ) -> Vec<LocalBoxFuture<'static, ()>>
    where
        V: TextTarget + 'static,
        U: ListTarget + 'static,
        I: ListTarget + 'static,
    {
        let RenderTargets {
            mut version,
            mut users,
            mut items,
        } = targets;

        let health = {
            let client = self.client.clone();
            let log = self.log.clone();
            async move { health_section(&client, &mut version, &log).await }.boxed_local()
        };
        let user_list = {
            let client = self.client.clone();
            let log = self.log.clone();
            async move { users_section(&client, &mut users, &log).await }.boxed_local()
        };
        let item_list = {
            let client = self.client.clone();
            let style = self.item_style.clone();
            let log = self.log.clone();
            async move { items_section(&client, &mut items, &style, &log).await }.boxed_local()
        };

        vec![health, user_list, item_list]
    }

    /// Spawn every section and return without waiting.
    pub fn start<V, U, I>(
        &self,
        targets: RenderTargets<V, U, I>,
        mut spawn: impl FnMut(LocalBoxFuture<'static, ()>),
    ) where
        V: TextTarget + 'static,
        U: ListTarget + 'static,
        I: ListTarget + 'static,
    {
        self.log.push(LogLevel::Info, "Loading dashboard sections");
        tracing::debug!(base_path = %self.client.config().base_path, "Starting dashboard sections");
        for section in self.sections(targets) {
            spawn(section);
        }
    }

    /// Drive every section to completion.
    pub async fn run<V, U, I>(&self, targets: RenderTargets<V, U, I>)
    where
        V: TextTarget + 'static,
        U: ListTarget + 'static,
        I: ListTarget + 'static,
    {
        join_all(self.sections(targets)).await;
    }
}
