mod presentation_steps;
mod summary_steps;
