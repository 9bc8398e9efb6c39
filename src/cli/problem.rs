// src/cli/problem.rs — One-shot problem generation

use crate::client::LearningApi;

pub async fn run_problem(
    api: &dyn LearningApi,
    topic: &str,
    problem_type: &str,
    difficulty: &str,
) -> anyhow::Result<()> {
    let reply = api.generate_problem(topic, problem_type, difficulty).await?;

    println!("Practice problem ({topic}, {problem_type}, {difficulty}):");
    println!();
    println!("{}", reply.problem.problem_statement);

    if !reply.problem.hints.is_empty() {
        println!();
        println!("Hints:");
        for hint in &reply.problem.hints {
            println!("  - {hint}");
        }
    }

    Ok(())
}
