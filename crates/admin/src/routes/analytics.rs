//! Sales analysis page: line, pie and bar charts rendered as inline SVG.

use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};
use tracing::instrument;

use atelier_core::analytics::{AnalyticsReport, SalesTotals};
use atelier_core::price::CURRENCY_SYMBOL;

use crate::components::Shell;
use crate::components::charts::{
    self, BarChart, HEIGHT, LineChart, PieChart, bar_chart, line_chart, pie_chart,
};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::services::Notifier;
use crate::state::AppState;

/// Headline figures above the charts.
#[derive(Debug, Clone)]
pub struct TotalsView {
    pub orders: u64,
    pub sales: String,
}

impl From<SalesTotals> for TotalsView {
    fn from(totals: SalesTotals) -> Self {
        Self {
            orders: totals.orders,
            sales: format!("{CURRENCY_SYMBOL}{:.2}", totals.sales),
        }
    }
}

#[derive(Template)]
#[template(path = "analysis.html")]
struct AnalysisTemplate {
    shell: Shell,
    width: f64,
    height: f64,
    line: LineChart,
    pie: PieChart,
    bars: BarChart,
    totals: Option<TotalsView>,
    has_data: bool,
}

/// Build the analysis router.
pub fn router() -> Router<AppState> {
    Router::new().route("/analysis", get(index))
}

/// GET /analysis
#[instrument(skip_all)]
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    notifier: Notifier,
) -> Html<String> {
    let report = match state.api().analysis(&admin.token()).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch analysis");
            notifier.error(e.user_message()).await;
            AnalyticsReport::default()
        }
    };

    let template = AnalysisTemplate {
        shell: Shell::load("Analysis", "/analysis", &admin, &notifier).await,
        width: charts::WIDTH,
        height: HEIGHT,
        line: line_chart(&report.sales_over_time),
        pie: pie_chart(&report.profit_loss),
        bars: bar_chart(&report.top_products),
        totals: report.totals().map(TotalsView::from),
        has_data: !report.is_empty(),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
