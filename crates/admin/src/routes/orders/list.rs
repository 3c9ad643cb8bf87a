//! Orders calendar page.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::{NaiveDate, Utc};
use tracing::instrument;

use atelier_core::catalog::Product;
use atelier_core::orders::{Order, orders_on};

use crate::components::Shell;
use crate::components::calendar::{
    MonthCalendar, WEEKDAYS, month_calendar, parse_date, resolve_month,
};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::services::Notifier;
use crate::state::AppState;

use super::types::{OrderView, OrdersQuery, ProductLookup};

/// Orders page template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub shell: Shell,
    pub calendar: MonthCalendar,
    pub weekdays: [&'static str; 7],
    pub selected_label: Option<String>,
    pub selected_date: String,
    pub month_param: String,
    pub orders: Vec<OrderView>,
}

/// Month calendar with the selected day's orders underneath.
///
/// GET /orders
#[instrument(skip(admin, state, notifier))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
    Query(query): Query<OrdersQuery>,
) -> Html<String> {
    let today = Utc::now().date_naive();
    let selected = query.date.as_deref().and_then(parse_date);
    let month = resolve_month(query.month.as_deref(), selected, today);

    let orders = match state.api().list_orders(&admin.token()).await {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch orders");
            notifier.error(e.user_message()).await;
            Vec::new()
        }
    };

    let day_orders = match selected {
        Some(day) => selected_orders(&state, &orders, day).await,
        None => Vec::new(),
    };

    let template = OrdersIndexTemplate {
        shell: Shell::load("Orders", "/orders", &admin, &notifier).await,
        calendar: month_calendar(month, selected, today, &orders),
        weekdays: WEEKDAYS,
        selected_label: selected.map(|day| day.format("%A %-d %B %Y").to_string()),
        selected_date: selected
            .map(|day| day.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        month_param: month.format("%Y-%m").to_string(),
        orders: day_orders,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Views of the orders placed on `day`.
///
/// The catalog is only fetched when the day has orders; items that carry
/// their own name, price and image render without it.
async fn selected_orders(state: &AppState, orders: &[Order], day: NaiveDate) -> Vec<OrderView> {
    let on_day = orders_on(orders, day);
    if on_day.is_empty() {
        return Vec::new();
    }

    let products: Vec<Product> = match state.api().list_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch products for order items");
            Vec::new()
        }
    };

    let lookup = ProductLookup::new(&products, state.api_base());
    on_day.into_iter().map(|order| lookup.order(order)).collect()
}
