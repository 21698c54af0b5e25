//! Noyau de calcul
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie complète (ErreurCalc)
//! - jetons.rs     : normalisation × ÷ -> * / + tokenisation
//! - rpn.rs        : shunting-yard + évaluation postfixe
//! - eval.rs       : pipeline complet
//! - valide.rs     : garde de bornes + validation frappe/grammaire
//! - format.rs     : milliers, décimales bornées, résultat
//! - controleur.rs : machine à états {expression, resultat, erreur}

pub mod controleur;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod valide;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use controleur::Calculatrice;
pub use erreurs::ErreurCalc;
pub use eval::{calcul_sur, calcule_expression, est_expression_valide};
pub use format::{format_expression, format_resultat};
