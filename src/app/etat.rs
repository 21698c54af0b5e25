//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le contrôleur de la calculette et les lectures
//! dérivées pour l'affichage (aperçu en cours de frappe), sans aucune
//! logique de rendu.
//!
//! Contrats :
//! - Le noyau est la seule source de vérité : pas d'état dupliqué ici.
//! - L'aperçu échoue en silence (jamais d'erreur visible à la frappe).

use crate::noyau::{calcul_sur, valide::valide_expression, Calculatrice};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl AppCalc {
    /// Aperçu du résultat en cours de frappe.
    ///
    /// Affiché seulement quand aucun résultat final n'est posé, et
    /// seulement si l'expression passe la grammaire complète : une
    /// expression à moitié saisie ne montre rien, sans erreur.
    pub fn apercu(&self) -> Option<f64> {
        if self.calc.resultat.is_some() {
            return None;
        }
        if valide_expression(&self.calc.expression).is_err() {
            return None;
        }
        calcul_sur(&self.calc.expression)
    }
}
