//! Noyau — évaluation (pipeline complet)
//!
//! normalise -> tokenize -> RPN -> pile numérique -> contrôle fini
//!
//! Les glyphes d'affichage (× ÷) ne vivent que dans l'expression
//! visible ; tout ce qui entre ici est ramené à * et / d'abord.

use super::erreurs::{ErreurCalc, Resultat};
use super::jetons::{normalise, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression complète et retourne sa valeur.
///
/// Erreurs typées : EntreeVide, Syntaxe, HorsBornes,
/// ParenthesesDesequilibrees, DivisionParZero, ResultatNonFini.
pub fn calcule_expression(expression: &str) -> Resultat<f64> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    let jetons = tokenize(&normalise(s))?;
    let rpn = to_rpn(&jetons)?;
    let v = eval_rpn(&rpn)?;

    // garde contre les combinaisons pathologiques de littéraux
    if !v.is_finite() {
        return Err(ErreurCalc::ResultatNonFini);
    }

    Ok(v)
}

/// Variante qui n'échoue jamais : None en cas d'erreur.
/// Utilisée par l'aperçu en cours de frappe.
pub fn calcul_sur(expression: &str) -> Option<f64> {
    calcule_expression(expression).ok()
}

/// Contrôle léger : la chaîne est-elle tokenizable ?
///
/// Volontairement PLUS FAIBLE que valide_expression : une parenthèse
/// non appariée passe ici (les jetons sont valides un à un). Pour un
/// vrai contrôle de grammaire, appeler valide_expression avant
/// d'évaluer.
pub fn est_expression_valide(expression: &str) -> bool {
    let s = expression.trim();
    if s.is_empty() {
        return false;
    }
    tokenize(&normalise(s)).is_ok()
}
