// src/noyau/erreurs.rs
//
// Taxonomie complète des erreurs du noyau.
// Deux niveaux d'usage:
// - valide_expression : grammaire de la chaîne complète (avant évaluation)
// - pipeline d'évaluation : jetons / RPN / arithmétique
//
// Les refus "à la frappe" (peut_ajouter_*) ne produisent JAMAIS d'erreur:
// la touche est simplement ignorée.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error("expression vide")]
    EntreeVide,

    #[error("caractère non autorisé")]
    CaractereInterdit,

    #[error("expression ne peut pas commencer par un opérateur")]
    OperateurEnTete,

    #[error("nombre manquant après l'opérateur")]
    OperateurEnFin,

    #[error("opérateurs consécutifs")]
    OperateursConsecutifs,

    #[error("point décimal mal formé")]
    DecimaleMalFormee,

    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    #[error("parenthèses vides")]
    ParenthesesVides,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    ResultatNonFini,

    #[error("expression mal formée")]
    Syntaxe,

    #[error("nombre hors bornes")]
    HorsBornes,
}

/// Alias pratique pour le noyau.
pub type Resultat<T> = std::result::Result<T, ErreurCalc>;
