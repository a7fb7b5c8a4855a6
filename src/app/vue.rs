// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Les espaces sont retirés ici, avant l’appel au noyau (le noyau n’en accepte aucun)

use eframe::egui;

use super::etat::{AppCalc, Demarche};
use calculatrice_reel_rationnel::{
    evaluer_avec_demarche, formater_resultat, DemarcheNoyau, ErreurCalcul,
};

const REGLES: &[&str] = &[
    "L’opération s’écrit Opérande_1 opérateur Opérande_2.",
    "Chaque opérande est un nombre réel ou rationnel, éventuellement négatif.",
    "Réel : 5 ou 5.12 — Rationnel : 6/3 ou 7/1.",
    "Opérateurs réels : +  -  *  /",
    "Opérateurs rationnels : +  -  *  :  (division)",
    "Un opérande réel et un opérande rationnel ensemble : opération invalide.",
];

const EXEMPLES: &[(&str, &str)] = &[
    ("Réel", "5.1+4"),
    ("Rationnel", "5/1:2"),
    ("Erreur", "5.2+5/1"),
    ("Erreur", "52214+"),
];

/// Retire tous les espaces (début, fin et internes).
pub fn normaliser_entree(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice réel / rationnel");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                Self::ui_regles(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Opération :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 5.1+4, 6/3:2/1, -3/4*2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + précision de lecture
        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=200)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for op in ["+", "-", "*", "/", ":"] {
                self.bouton_insert(ui, op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for touche in ligne {
                        self.bouton_insert(ui, touche);
                    }
                    match ligne[0] {
                        "7" => self.bouton_action(
                            ui,
                            "DEL",
                            "Efface le dernier symbole",
                            Action::Backspace,
                        ),
                        "4" => self.bouton_insert(ui, "/"),
                        _ => self.bouton_insert(ui, "."),
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, "-");
                self.bouton_insert(ui, ":");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 2);

        ui.add_space(6.0);

        ui.label("Lecture décimale :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "lecture_out", &self.lecture, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Genre", "demarche_genre", &self.demarche.genre);
                Self::champ_demarche(
                    ui,
                    "Opérateur",
                    "demarche_operateur",
                    &self.demarche.operateur,
                );
                Self::champ_demarche(
                    ui,
                    "Opérandes",
                    "demarche_operandes",
                    &self.demarche.operandes,
                );
                Self::champ_demarche(ui, "Avant", "demarche_avant", &self.demarche.avant);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn ui_regles(ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Règles d’utilisation")
            .default_open(false)
            .show(ui, |ui| {
                for r in REGLES {
                    ui.label(format!("• {r}"));
                }
                ui.add_space(4.0);
                for (genre, ex) in EXEMPLES {
                    ui.horizontal(|ui| {
                        ui.label(format!("({genre})"));
                        ui.monospace(*ex);
                    });
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    /// Pas d’espaces auto : la grammaire n’en accepte aucun.
    fn bouton_insert(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(touche));
        if resp.clicked() {
            self.entree.push_str(touche);
            self.focus_entree = true;
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/lecture/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = normaliser_entree(&self.entree);
        if s.is_empty() {
            self.set_erreur(ErreurCalcul::EntreeVide.to_string(), Demarche::default());
            return;
        }

        let (resultat, d_noyau) = evaluer_avec_demarche(&s);
        let d_ui = demarche_ui(d_noyau);

        match formater_resultat(&resultat, self.digits) {
            Ok(affichage) => self.set_resultats(affichage.exact, affichage.lecture, d_ui),
            Err(e) => self.set_erreur(e.to_string(), d_ui),
        }
    }
}

fn demarche_ui(d: DemarcheNoyau) -> Demarche {
    let operandes = if d.operande1.is_empty() && d.operande2.is_empty() {
        String::new()
    } else {
        format!("{}  |  {}", d.operande1, d.operande2)
    };

    Demarche {
        genre: d.genre,
        operateur: d.operateur,
        operandes,
        avant: d.avant,
        note: d.note,
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
