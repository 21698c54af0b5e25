//! src/noyau/controleur.rs
//!
//! Machine à états de la calculette.
//!
//! Rôle : porter le triplet {expression, resultat, erreur} et séquencer
//! validation à la frappe -> normalisation -> évaluation.
//!
//! Contrats :
//! - resultat et erreur ne sont jamais Some en même temps.
//! - une frappe illégale est un no-op silencieux, jamais une erreur.
//! - calculer() ne panique jamais et ne retourne jamais d'erreur :
//!   l'échec se lit dans `erreur`, l'expression reste intacte pour
//!   correction.

use super::erreurs::ErreurCalc;
use super::eval::calcule_expression;
use super::valide::{
    peut_ajouter_chiffre, peut_ajouter_decimale, peut_ajouter_operateur, valide_expression,
};

const OPERATEURS: [char; 4] = ['+', '-', '×', '÷'];

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    pub expression: String,
    pub resultat: Option<f64>,
    pub erreur: Option<ErreurCalc>,
}

fn est_operateur(valeur: &str) -> bool {
    matches!(valeur, "+" | "-" | "×" | "÷")
}

fn est_chiffre(valeur: &str) -> bool {
    !valeur.is_empty() && valeur.chars().all(|c| c.is_ascii_digit())
}

/// Rendu texte d'une valeur pour ré-injection dans l'expression
/// (5.0 => "5", 0.5 => "0.5").
fn nombre_en_texte(v: f64) -> String {
    format!("{v}")
}

/// Suffixe nombre signé de l'expression : position de départ + texte.
/// Exige au moins un chiffre ; le '-' collé devant est inclus.
fn suffixe_nombre_signe(s: &str) -> Option<(usize, &str)> {
    let mut debut = s.len();
    for (i, c) in s.char_indices().rev() {
        if c.is_ascii_digit() || c == '.' {
            debut = i;
        } else {
            break;
        }
    }
    if !s[debut..].chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if debut > 0 && s[..debut].ends_with('-') {
        debut -= 1;
    }
    Some((debut, &s[debut..]))
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message d'erreur prêt à afficher (source unique pour l'UI).
    pub fn erreur_texte(&self) -> Option<String> {
        self.erreur.as_ref().map(|e| e.to_string())
    }

    /// Saisie d'une touche logique : chiffre, opérateur, '.', parenthèse.
    /// Toute frappe acceptée efface resultat + erreur.
    pub fn saisir(&mut self, valeur: &str) {
        // après un résultat : un chiffre repart de zéro...
        if self.resultat.is_some() && est_chiffre(valeur) {
            self.expression = valeur.to_string();
        }
        // ...un opérateur enchaîne sur le résultat
        else if self.resultat.is_some() && est_operateur(valeur) {
            let r = self.resultat.expect("resultat présent");
            self.expression = format!("{} {valeur} ", nombre_en_texte(r));
        }
        // opérateur : entouré d'espaces, refusé en position illégale
        else if est_operateur(valeur) {
            if !peut_ajouter_operateur(&self.expression) {
                return;
            }
            self.expression = format!("{} {valeur} ", self.expression);
        }
        // point décimal : un seul par nombre, '0' injecté si besoin
        else if valeur == "." {
            if !peut_ajouter_decimale(&self.expression) {
                return;
            }
            let fin = self.expression.trim_end();
            if fin.is_empty() || fin.ends_with(OPERATEURS) {
                self.expression.push_str("0.");
            } else {
                self.expression.push('.');
            }
        }
        // chiffres (et parenthèses : la garde de bornes ne bloque
        // jamais une édition non numérique)
        else {
            if !peut_ajouter_chiffre(&self.expression, valeur) {
                return;
            }
            self.expression.push_str(valeur);
        }

        self.resultat = None;
        self.erreur = None;
    }

    /// Supprime le dernier caractère, puis les espaces de fin : un
    /// opérateur " op " part d'un bloc, sans espace orphelin.
    pub fn retour_arriere(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        self.expression.pop();
        while self.expression.ends_with(' ') {
            self.expression.pop();
        }

        self.resultat = None;
        self.erreur = None;
    }

    /// AC : remise à zéro totale.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.resultat = None;
        self.erreur = None;
    }

    /// Évalue l'expression courante.
    /// Échec => erreur posée, expression conservée, retour None.
    pub fn calculer(&mut self) -> Option<f64> {
        if let Err(e) = valide_expression(&self.expression) {
            log::debug!("expression refusée ({e}): {:?}", self.expression);
            self.erreur = Some(e);
            self.resultat = None;
            return None;
        }

        match calcule_expression(&self.expression) {
            Ok(v) => {
                log::debug!("{:?} = {v}", self.expression);
                self.resultat = Some(v);
                self.erreur = None;
                Some(v)
            }
            Err(e) => {
                log::debug!("évaluation échouée ({e}): {:?}", self.expression);
                self.erreur = Some(e);
                self.resultat = None;
                None
            }
        }
    }

    /// Bascule le signe du dernier nombre, le reste de l'expression
    /// inchangé. No-op s'il n'y a pas de nombre en fin.
    pub fn basculer_signe(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        let Some((debut, nombre)) = suffixe_nombre_signe(&self.expression) else {
            return;
        };

        let bascule = match nombre.strip_prefix('-') {
            Some(positif) => positif.to_string(),
            None => format!("-{nombre}"),
        };

        self.expression.truncate(debut);
        self.expression.push_str(&bascule);

        self.resultat = None;
        self.erreur = None;
    }

    /// Remplace le dernier nombre par sa valeur divisée par 100.
    pub fn pourcentage(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        let Some((debut, nombre)) = suffixe_nombre_signe(&self.expression) else {
            return;
        };

        let Ok(v) = nombre.parse::<f64>() else {
            return;
        };

        let texte = nombre_en_texte(v / 100.0);
        self.expression.truncate(debut);
        self.expression.push_str(&texte);

        self.resultat = None;
        self.erreur = None;
    }
}
