pub mod answers;
pub mod catalog;
pub mod engine;
pub mod plan;
pub mod questions;
pub mod router;
pub mod session;

pub use answers::{AnswerError, AnswerSet, AnswerValue};
pub use catalog::{Catalog, CatalogEntry, Tag, CATALOG_VERSION};
pub use engine::{ClassScore, Recommendation, RecommendationEngine};
pub use plan::{render_plan, PLAN_FILE_NAME};
pub use questions::{question_set, QuestionDefinition, QuestionKey, QuizVariant, SelectionMode};
pub use router::{quiz_router, QuizState};
pub use session::{QuizSession, SessionError, SessionPosition, ToggleOutcome};
