//! Calculette de change
//!
//! Surface bibliothèque : le noyau de calcul (expression incrémentale,
//! validation à la frappe, évaluation avec précédence, formatage) et
//! l'application egui qui l'habille.
//!
//! Le noyau (`noyau`) est pur, synchrone et sans E/S : une
//! [`noyau::Calculatrice`] par session, pilotée une frappe à la fois.

pub mod app;
pub mod noyau;
