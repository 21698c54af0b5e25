// src/noyau/format.rs
//
// Affichage des nombres :
// - séparateur de milliers (virgule)
// - au plus 8 décimales, sans zéros de fin forcés
// - entrée non numérique ou non finie : rendue telle quelle
//   (chemin de secours, pas un chemin d'erreur)

use super::valide::MAX_DECIMALES;

/* ------------------------ Helpers ------------------------ */

/// Insère une virgule tous les trois chiffres (partie entière seule,
/// sans signe).
fn groupe_milliers(chiffres: &str) -> String {
    let mut out = String::with_capacity(chiffres.len() + chiffres.len() / 3);
    let n = chiffres.len();
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/* ------------------------ API ------------------------ */

/// Formate une valeur finie : groupement de milliers, au plus
/// 8 décimales (arrondies), pas de zéros de fin.
/// Non fini => chaîne brute inchangée.
pub fn format_valeur(valeur: f64) -> String {
    if !valeur.is_finite() {
        return valeur.to_string();
    }

    // arrondi à 8 décimales, puis retrait des zéros de fin
    let mut s = format!("{valeur:.max$}", max = MAX_DECIMALES);
    if s.contains('.') {
        s.truncate(s.trim_end_matches('0').trim_end_matches('.').len());
    }

    let (signe, reste) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s.as_str()),
    };

    let (entier, frac) = match reste.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (reste, None),
    };

    let mut out = String::new();
    out.push_str(signe);
    out.push_str(&groupe_milliers(entier));
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Variante texte : si le texte ne se lit pas comme un nombre fini,
/// il ressort inchangé (on ne bloque jamais l'affichage).
pub fn format_nombre(texte: &str) -> String {
    match texte.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => format_valeur(v),
        _ => texte.to_string(),
    }
}

/// Formate chaque nombre d'une expression, sans toucher aux
/// opérateurs, parenthèses ni espaces.
///
/// N'est appelée QUE sur l'expression canonique (jamais sur sa propre
/// sortie : le séparateur de milliers n'est pas re-parsable).
pub fn format_expression(expression: &str) -> String {
    let chars: Vec<char> = expression.chars().collect();
    let mut out = String::with_capacity(expression.len() + 8);
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // début d'un nombre : chiffre, ou '-' collé à un chiffre
        let signe = c == '-' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit();
        if !(c.is_ascii_digit() || signe) {
            out.push(c);
            i += 1;
            continue;
        }

        let debut = i;
        if signe {
            i += 1;
        }
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        // partie décimale : un point SUIVI d'au moins un chiffre
        if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }

        let nombre: String = chars[debut..i].iter().collect();
        out.push_str(&format_nombre(&nombre));
    }

    out
}

/// Résultat final : entier rendu nu, sinon arrondi à `decimales`
/// puis débarrassé des zéros de fin ("1.0" => "1").
pub fn format_resultat(valeur: f64, decimales: usize) -> String {
    if !valeur.is_finite() {
        return valeur.to_string();
    }

    if valeur.fract() == 0.0 {
        return format!("{valeur}");
    }

    let arrondi = format!("{valeur:.decimales$}");
    arrondi
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
