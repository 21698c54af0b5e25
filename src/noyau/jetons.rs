// src/noyau/jetons.rs

use super::erreurs::{ErreurCalc, Resultat};
use super::valide::nombre_hors_bornes;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Normalise une expression "affichage" vers la forme interne:
/// - × -> *
/// - ÷ -> /
/// - + et - inchangés
///
/// Appliquée UNIQUEMENT sur le chemin d'évaluation, jamais sur
/// l'expression affichée.
pub fn normalise(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            autre => autre,
        })
        .collect()
}

/// Tokenize une chaîne normalisée en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - moins unaire : un '-' en tête, après un opérateur ou après '('
///   est absorbé dans le littéral qui suit ("-3" => Num(-3))
///
/// Bornes (contrat frappe + évaluation) : un littéral au-delà de
/// l'entier sûr (2^53 - 1) ou avec plus de 8 décimales est refusé.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Moins unaire : pas de valeur fermée juste avant => signe du littéral.
        let moins_unaire =
            c == '-' && !matches!(out.last(), Some(Tok::Num(_)) | Some(Tok::RPar));

        // Nombre (avec signe éventuel)
        if c.is_ascii_digit() || c == '.' || moins_unaire {
            let start = i;
            if moins_unaire {
                i += 1;
            }
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }

            let brut: String = chars[start..i].iter().collect();
            let v: f64 = brut.parse().map_err(|_| ErreurCalc::Syntaxe)?;

            if nombre_hors_bornes(&brut) {
                return Err(ErreurCalc::HorsBornes);
            }

            out.push(Tok::Num(v));
            continue;
        }

        // Opérateurs binaires
        match c {
            '+' => out.push(Tok::Plus),
            '-' => out.push(Tok::Minus),
            '*' => out.push(Tok::Star),
            '/' => out.push(Tok::Slash),
            _ => return Err(ErreurCalc::Syntaxe),
        }
        i += 1;
    }

    Ok(out)
}
