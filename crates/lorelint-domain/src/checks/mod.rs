use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use lorelint_types::Violation;

pub mod file_references;
pub mod id_uniqueness;
pub mod language;


/// Checks run in a fixed order; their violation lists are concatenated
/// without re-sorting.
pub fn run_all(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Violation>) {
    id_uniqueness::run(model, cfg, out);
    file_references::run(model, cfg, out);
    language::run(model, cfg, out);
}
