//! Tests de propriétés : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau et le contrôleur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * expression bien formée => valide_expression accepte
//!   * resultat et erreur jamais Some en même temps
//!   * l'expression ne contient que des caractères autorisés
//!   * calculer() ne panique jamais

use std::time::{Duration, Instant};

use super::controleur::Calculatrice;
use super::erreurs::ErreurCalc;
use super::eval::{calcul_sur, calcule_expression};
use super::valide::valide_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(10_000);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    }
}

fn gen_operateur(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "+",
        1 => "-",
        2 => "×",
        _ => "÷",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(4) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        _ => format!(
            "{} {} {}",
            gen_expr(rng, depth - 1),
            gen_operateur(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

fn verifie_invariant(calc: &Calculatrice) {
    assert!(
        !(calc.resultat.is_some() && calc.erreur.is_some()),
        "resultat et erreur simultanés: {calc:?}"
    );
    assert!(
        calc.expression
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "+-×÷.()".contains(c)),
        "caractère inattendu dans {:?}",
        calc.expression
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn expressions_bien_formees_acceptees_et_evaluables() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        // générée bien formée => la grammaire complète l'accepte
        assert!(
            valide_expression(&expr).is_ok(),
            "expression générée refusée: {expr:?}"
        );

        // l'évaluation réussit, ou échoue UNIQUEMENT pour une division
        // par zéro (0 fait partie des littéraux générés)
        match calcule_expression(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "résultat non fini accepté: {expr:?}");
                vus_ok += 1;
            }
            Err(ErreurCalc::DivisionParZero) => {}
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(vus_ok > 100, "trop peu de succès: {vus_ok}");
}

#[test]
fn tempete_de_frappes_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut calc = Calculatrice::new();

    let touches = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "(", ")",
    ];

    for _ in 0..2_000 {
        budget(t0, max);

        match rng.pick(10) {
            0 => calc.retour_arriere(),
            1 => {
                let _ = calc.calculer();
            }
            2 => calc.basculer_signe(),
            3 => calc.pourcentage(),
            4 if rng.pick(8) == 0 => calc.effacer(),
            _ => {
                let t = touches[rng.pick(touches.len() as u32) as usize];
                calc.saisir(t);
            }
        }

        verifie_invariant(&calc);
    }

    // quoi qu'il arrive, on sait toujours revenir à l'état initial
    calc.effacer();
    assert_eq!(calc.expression, "");
    assert_eq!(calc.resultat, None);
    assert_eq!(calc.erreur, None);
}

#[test]
fn tempete_deterministe() {
    // même seed => même suite de frappes => même état final
    fn passe(seed: u64) -> (String, Option<f64>) {
        let mut rng = Rng::new(seed);
        let mut calc = Calculatrice::new();
        let touches = ["1", "2", "3", ".", "+", "-", "×", "÷", "(", ")"];

        for _ in 0..500 {
            match rng.pick(8) {
                0 => calc.retour_arriere(),
                1 => {
                    let _ = calc.calculer();
                }
                _ => calc.saisir(touches[rng.pick(touches.len() as u32) as usize]),
            }
        }
        (calc.expression.clone(), calc.resultat)
    }

    assert_eq!(passe(42), passe(42));
}

#[test]
fn apercu_jamais_en_echec() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xFACADE_u64);

    // calcul_sur est appelé à chaque frappe par l'aperçu : il ne doit
    // jamais paniquer, même sur des préfixes d'expression
    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        for fin in 0..=expr.len() {
            if expr.is_char_boundary(fin) {
                let _ = calcul_sur(&expr[..fin]);
            }
        }
    }
}
