// src/noyau/valide.rs
//
// Deux niveaux de validation:
// - à la frappe (peut_ajouter_*) : la touche illégale est ignorée,
//   jamais d'erreur visible
// - avant évaluation (valide_expression) : grammaire complète de la
//   chaîne, une ErreurCalc distincte par cas, dans l'ordre
//
// Convention d'écriture du contrôleur : les opérateurs binaires sont
// toujours entourés d'espaces (" + "), ce qui rend l'extraction du
// dernier nombre par simple suffixe [0-9.] correcte.

use super::erreurs::{ErreurCalc, Resultat};

/// Plus grande magnitude entière exactement représentable (2^53 - 1).
pub const ENTIER_SUR_MAX: f64 = 9_007_199_254_740_991.0;

/// Nombre maximal de chiffres après le point décimal.
pub const MAX_DECIMALES: usize = 8;

const OPERATEURS: [char; 4] = ['+', '-', '×', '÷'];

/* ------------------------ Garde de bornes ------------------------ */

/// Vrai si un littéral numérique nu dépasse les bornes sûres:
/// |v| > 2^53 - 1, ou plus de 8 chiffres après le point.
/// Entrée non numérique ou vide => false (ne bloque jamais une
/// édition non numérique).
pub fn nombre_hors_bornes(texte: &str) -> bool {
    let t = texte.trim();
    if t.is_empty() {
        return false;
    }

    let v: f64 = match t.parse() {
        Ok(v) => v,
        Err(_) => return false,
    };

    if !v.is_finite() || v.abs() > ENTIER_SUR_MAX {
        return true;
    }

    // décimales comptées sur le texte, pas sur le flottant
    match t.split_once('.') {
        Some((_, frac)) => frac.len() > MAX_DECIMALES,
        None => false,
    }
}

/// Vrai si un chiffre peut encore être ajouté au nombre en cours
/// de saisie sans sortir des bornes. À vérifier AVANT chaque
/// insertion (la borne est préventive, pas corrective).
pub fn peut_ajouter_chiffre(expression: &str, entrant: &str) -> bool {
    let mut candidat = dernier_nombre(expression).to_string();
    candidat.push_str(entrant);
    !nombre_hors_bornes(&candidat)
}

/// Suffixe numérique de l'expression (plus long suffixe [0-9.]).
/// Chaîne vide si l'expression se termine par un opérateur.
pub fn dernier_nombre(expression: &str) -> &str {
    let s = expression.trim_end();
    let mut debut = s.len();
    for (i, c) in s.char_indices().rev() {
        if c.is_ascii_digit() || c == '.' {
            debut = i;
        } else {
            break;
        }
    }
    &s[debut..]
}

/* ------------------------ Validation à la frappe ------------------------ */

/// Un opérateur ne suit jamais : rien, un opérateur, un point, ou '('.
pub fn peut_ajouter_operateur(expression: &str) -> bool {
    let fin = expression.trim_end();

    match fin.chars().last() {
        None => false,
        Some(c) if OPERATEURS.contains(&c) => false,
        Some('.') => false,
        Some('(') => false,
        Some(_) => true,
    }
}

/// Un seul point par nombre en cours de saisie.
pub fn peut_ajouter_decimale(expression: &str) -> bool {
    if expression.trim().is_empty() {
        return true;
    }
    !dernier_nombre(expression).contains('.')
}

/* ------------------------ Validation complète ------------------------ */

fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || "+-×÷.()".contains(c)
}

/// Grammaire de la chaîne complète, juste avant évaluation.
/// Les contrôles sont ordonnés ; chacun produit sa propre erreur.
pub fn valide_expression(expression: &str) -> Resultat<()> {
    let nettoye = expression.trim();

    // 1) vide
    if nettoye.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    // 2) caractères autorisés seulement
    if !nettoye.chars().all(caractere_autorise) {
        return Err(ErreurCalc::CaractereInterdit);
    }

    // 3) pas d'opérateur en tête (sauf '-' : négation unaire)
    if nettoye.starts_with(['+', '×', '÷']) {
        return Err(ErreurCalc::OperateurEnTete);
    }

    // 4) pas d'opérateur en fin
    if nettoye.ends_with(OPERATEURS) {
        return Err(ErreurCalc::OperateurEnFin);
    }

    // 5) pas d'opérateurs consécutifs (espaces ignorés)
    let compact: Vec<char> = nettoye.chars().filter(|c| !c.is_whitespace()).collect();
    if compact
        .windows(2)
        .any(|w| OPERATEURS.contains(&w[0]) && OPERATEURS.contains(&w[1]))
    {
        return Err(ErreurCalc::OperateursConsecutifs);
    }

    // 6) point décimal doublé
    if nettoye.contains("..") {
        return Err(ErreurCalc::DecimaleMalFormee);
    }

    // 7) parenthèses équilibrées (comptage : l'expression complète
    //    doit fermer ce qu'elle ouvre)
    let ouvrantes = nettoye.chars().filter(|&c| c == '(').count();
    let fermantes = nettoye.chars().filter(|&c| c == ')').count();
    if ouvrantes != fermantes {
        return Err(ErreurCalc::ParenthesesDesequilibrees);
    }

    // 8) parenthèses vides
    if nettoye.contains("()") {
        return Err(ErreurCalc::ParenthesesVides);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /* ---- valide_expression ---- */

    #[test]
    fn accepte_expressions_bien_formees() {
        assert!(valide_expression("100 + 50").is_ok());
        assert!(valide_expression("(2 + 3) × 4").is_ok());
        assert!(valide_expression("-5 + 3").is_ok());
        assert!(valide_expression("1.5 ÷ 0.3").is_ok());
    }

    #[test]
    fn refuse_vide() {
        assert_eq!(valide_expression(""), Err(ErreurCalc::EntreeVide));
        assert_eq!(valide_expression("   "), Err(ErreurCalc::EntreeVide));
    }

    #[test]
    fn refuse_caractere_interdit() {
        assert_eq!(valide_expression("abc"), Err(ErreurCalc::CaractereInterdit));
        assert_eq!(
            valide_expression("1 + 2$"),
            Err(ErreurCalc::CaractereInterdit)
        );
    }

    #[test]
    fn refuse_operateur_en_tete() {
        assert_eq!(
            valide_expression("+ 1"),
            Err(ErreurCalc::OperateurEnTete)
        );
        assert_eq!(
            valide_expression("× 2"),
            Err(ErreurCalc::OperateurEnTete)
        );
        // le moins unaire en tête reste permis
        assert!(valide_expression("-2 + 1").is_ok());
    }

    #[test]
    fn refuse_operateur_en_fin() {
        assert_eq!(valide_expression("100 +"), Err(ErreurCalc::OperateurEnFin));
        assert_eq!(valide_expression("2 ×"), Err(ErreurCalc::OperateurEnFin));
    }

    #[test]
    fn refuse_operateurs_consecutifs() {
        assert_eq!(
            valide_expression("100 + + 50"),
            Err(ErreurCalc::OperateursConsecutifs)
        );
        assert_eq!(
            valide_expression("2 ×÷ 3"),
            Err(ErreurCalc::OperateursConsecutifs)
        );
    }

    #[test]
    fn refuse_decimale_doublee() {
        assert_eq!(
            valide_expression("1..2 + 3"),
            Err(ErreurCalc::DecimaleMalFormee)
        );
    }

    #[test]
    fn refuse_parentheses_desequilibrees() {
        assert_eq!(
            valide_expression("(1 + 2"),
            Err(ErreurCalc::ParenthesesDesequilibrees)
        );
        assert_eq!(
            valide_expression("1 + 2)"),
            Err(ErreurCalc::ParenthesesDesequilibrees)
        );
    }

    #[test]
    fn refuse_parentheses_vides() {
        assert_eq!(
            valide_expression("1 + ()"),
            Err(ErreurCalc::ParenthesesVides)
        );
    }

    /* ---- frappe : opérateur ---- */

    #[test]
    fn operateur_apres_nombre_seulement() {
        assert!(peut_ajouter_operateur("100"));
        assert!(peut_ajouter_operateur("(2 + 3)"));

        assert!(!peut_ajouter_operateur(""));
        assert!(!peut_ajouter_operateur("100 + "));
        assert!(!peut_ajouter_operateur("100."));
        assert!(!peut_ajouter_operateur("100 × ("));
    }

    /* ---- frappe : décimale ---- */

    #[test]
    fn decimale_une_seule_par_nombre() {
        assert!(peut_ajouter_decimale(""));
        assert!(peut_ajouter_decimale("100"));
        assert!(peut_ajouter_decimale("100.5 + 50"));

        assert!(!peut_ajouter_decimale("100.5"));
        assert!(!peut_ajouter_decimale("1 + 2."));
    }

    /* ---- garde de bornes ---- */

    #[test]
    fn bornes_entier_sur() {
        assert!(!nombre_hors_bornes("9007199254740991")); // 2^53 - 1
        assert!(!nombre_hors_bornes("1000000000"));
        assert!(nombre_hors_bornes("9007199254740992"));
        assert!(nombre_hors_bornes("10000000000000000"));
    }

    #[test]
    fn bornes_negatifs() {
        assert!(!nombre_hors_bornes("-9007199254740991"));
        assert!(nombre_hors_bornes("-9007199254740992"));
    }

    #[test]
    fn bornes_decimales() {
        assert!(!nombre_hors_bornes("123.12345678")); // 8 décimales
        assert!(nombre_hors_bornes("123.123456789")); // 9 décimales
        assert!(!nombre_hors_bornes("0.00000001"));
    }

    #[test]
    fn bornes_non_numerique() {
        assert!(!nombre_hors_bornes(""));
        assert!(!nombre_hors_bornes("abc"));
        assert!(!nombre_hors_bornes("12(")); // édition non numérique : jamais bloquée
    }

    #[test]
    fn chiffre_refuse_en_limite() {
        assert!(peut_ajouter_chiffre("", "1"));
        assert!(peut_ajouter_chiffre("12345", "6"));
        assert!(peut_ajouter_chiffre("1000000000", "0"));

        assert!(!peut_ajouter_chiffre("9007199254740991", "0"));
        assert!(!peut_ajouter_chiffre("900719925474099", "2"));

        assert!(peut_ajouter_chiffre("123.1234567", "8"));
        assert!(!peut_ajouter_chiffre("123.12345678", "9"));

        // seul le dernier nombre compte
        assert!(!peut_ajouter_chiffre("100 + 9007199254740991", "0"));
        assert!(peut_ajouter_chiffre("100 + 1000000000", "0"));
    }

    #[test]
    fn extraction_dernier_nombre() {
        assert_eq!(dernier_nombre("100 + 50"), "50");
        assert_eq!(dernier_nombre("123.45"), "123.45");
        assert_eq!(dernier_nombre("100 + "), "");
        assert_eq!(dernier_nombre("2 × 3"), "3");
        assert_eq!(dernier_nombre(""), "");
    }
}
