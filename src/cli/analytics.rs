// src/cli/analytics.rs — One-shot analytics report

use crate::client::LearningApi;
use crate::ui::analytics::AnalyticsView;

/// Fetch analytics and print them as a plain report.
pub async fn run_analytics(api: &dyn LearningApi) -> anyhow::Result<()> {
    let snapshot = api.get_analytics().await?;
    let view = AnalyticsView::from_snapshot(&snapshot);

    println!("Analytics for {}", api.user_id());
    println!();
    println!("  Total interactions:  {}", view.total_interactions);
    println!("  Problems solved:     {}", view.problems_solved);
    println!("  Average score:       {}%", view.average_score);

    println!();
    println!("Topics covered:");
    for topic in &view.topics {
        println!("  - {topic}");
    }

    println!();
    println!("Knowledge gaps:");
    for gap in &view.gaps {
        println!("  - {gap}");
    }

    println!();
    println!("Problem history:");
    for row in &view.progression {
        println!("  {row}");
    }

    Ok(())
}
