//! 各资源的表单定义

use serde_json::Value;

use super::schema::{Derivation, EmptyPolicy, FieldKind, FieldSpec, FormSchema, Hint, Reference};
use crate::models::ResourceKind;
use crate::models::common::choices::{
    BULLETIN_PERIODS, COMMUNICATION_TYPES, NOTE_PERIODS, PAYMENT_STATUSES, TERMS,
};

fn text(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn or_else(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn eleve_label(record: &Value) -> String {
    format!(
        "{} {} - {}",
        text(record, "nom"),
        text(record, "prenom"),
        or_else(text(record, "nomClasse"), "Sans classe")
    )
}

fn user_label(record: &Value) -> String {
    format!(
        "{} {} - {}",
        text(record, "nom"),
        text(record, "prenom"),
        text(record, "email")
    )
}

fn teacher_label(record: &Value) -> String {
    format!("{} {}", text(record, "nom"), text(record, "prenom"))
}

fn classe_label(record: &Value) -> String {
    format!(
        "{} - {}",
        text(record, "nomClasse"),
        text(record, "anneeScolaire")
    )
}

fn cours_label(record: &Value) -> String {
    format!(
        "{} - {}",
        text(record, "nom"),
        or_else(text(record, "nomClasse"), "Toutes classes")
    )
}

fn bulletin_label(record: &Value) -> String {
    format!(
        "{} {} - {} - {}",
        text(record, "eleveNom"),
        text(record, "elevePrenom"),
        text(record, "periode"),
        text(record, "nomClasse")
    )
}

fn note_label(record: &Value) -> String {
    format!(
        "{} {} - {} - {}/{}",
        text(record, "nomEleve"),
        text(record, "prenomEleve"),
        text(record, "nomCours"),
        text(record, "pointObtenu"),
        or_else(text(record, "ponderation"), "20")
    )
}

fn role_label(record: &Value) -> String {
    or_else(text(record, "nom"), &text(record, "nomRole"))
}

const ELEVES: Reference = Reference {
    resource: ResourceKind::Eleves,
    roles: &[],
    value_key: "id",
    label: eleve_label,
};

const CLASSES: Reference = Reference {
    resource: ResourceKind::Classes,
    roles: &[],
    value_key: "id",
    label: classe_label,
};

const COURS: Reference = Reference {
    resource: ResourceKind::Cours,
    roles: &[],
    value_key: "id",
    label: cours_label,
};

const TEACHERS: Reference = Reference {
    resource: ResourceKind::Users,
    roles: &["ENSEIGNANT", "ADMIN"],
    value_key: "id",
    label: teacher_label,
};

const PARENTS: Reference = Reference {
    resource: ResourceKind::Users,
    roles: &["PARENT"],
    value_key: "id",
    label: user_label,
};

const USERS: Reference = Reference {
    resource: ResourceKind::Users,
    roles: &[],
    value_key: "id",
    label: user_label,
};

const BULLETINS: Reference = Reference {
    resource: ResourceKind::Bulletins,
    roles: &[],
    value_key: "id",
    label: bulletin_label,
};

const NOTES: Reference = Reference {
    resource: ResourceKind::Notes,
    roles: &[],
    value_key: "id",
    label: note_label,
};

// 角色按名称提交
const ROLES: Reference = Reference {
    resource: ResourceKind::Roles,
    roles: &[],
    value_key: "nom",
    label: role_label,
};

pub static USER_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Users,
    create_title: "Ajouter un utilisateur",
    edit_title: "Modifier l'utilisateur",
    fields: &[
        FieldSpec::text("nom", "Nom").required(),
        FieldSpec::text("prenom", "Prénom").required(),
        FieldSpec::text("email", "Email").required().hint(Hint::Email),
        FieldSpec::text("telephone", "Téléphone")
            .wire("numeroTelephone")
            .hint(Hint::Phone),
        FieldSpec::text("adresse", "Adresse"),
        FieldSpec::new("motDePasse", "Mot de passe", FieldKind::Secret)
            .required_on_create()
            .empty(EmptyPolicy::Omit)
            .helper("Laisser vide pour conserver le mot de passe actuel"),
        FieldSpec::new("role", "Rôle", FieldKind::Tag(ROLES))
            .wire("roles")
            .required()
            .missing("Veuillez sélectionner un rôle"),
    ],
    derivation: None,
};

pub static ROLE_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Roles,
    create_title: "Ajouter un rôle",
    edit_title: "Modifier le rôle",
    fields: &[FieldSpec::text("nom", "Nom").required()],
    derivation: None,
};

pub static ELEVE_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Eleves,
    create_title: "Ajouter un élève",
    edit_title: "Modifier l'élève",
    fields: &[
        FieldSpec::text("nom", "Nom").required(),
        FieldSpec::text("prenom", "Prénom").required(),
        FieldSpec::date("dateNaissance", "Date de naissance"),
        FieldSpec::text("lieuNaissance", "Lieu de naissance").empty(EmptyPolicy::Keep),
        FieldSpec::text("numeroPermanent", "Numéro permanent").empty(EmptyPolicy::Keep),
        FieldSpec::choice("statutPaiement", "Statut de paiement", PAYMENT_STATUSES)
            .default("NON_EN_ORDRE"),
        FieldSpec::reference("classeId", "Classe", CLASSES),
    ],
    derivation: None,
};

pub static CLASSE_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Classes,
    create_title: "Ajouter une classe",
    edit_title: "Modifier la classe",
    fields: &[
        FieldSpec::text("nomClasse", "Nom de la classe").required(),
        FieldSpec::text("anneeScolaire", "Année scolaire")
            .required()
            .helper("Ex: 2024-2025"),
        FieldSpec::reference("enseignantId", "Enseignant", TEACHERS),
    ],
    derivation: None,
};

pub static COURS_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Cours,
    create_title: "Ajouter un cours",
    edit_title: "Modifier le cours",
    fields: &[
        FieldSpec::text("nom", "Nom du cours").required(),
        FieldSpec::decimal("ponderation", "Pondération")
            .required()
            .empty(EmptyPolicy::Zero),
        FieldSpec::reference("classeId", "Classe", CLASSES),
        FieldSpec::reference("enseignantId", "Enseignant", TEACHERS),
    ],
    derivation: None,
};

pub static NOTE_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Notes,
    create_title: "Ajouter une note",
    edit_title: "Modifier la note",
    fields: &[
        FieldSpec::reference("eleveId", "Élève", ELEVES).required(),
        FieldSpec::reference("coursId", "Cours", COURS).required(),
        FieldSpec::choice("periode", "Période", NOTE_PERIODS).required(),
        FieldSpec::decimal("pointObtenu", "Points obtenus")
            .required()
            .empty(EmptyPolicy::Zero),
        FieldSpec::decimal("ponderation", "Pondération (points maximum)")
            .required()
            .empty(EmptyPolicy::Zero),
    ],
    derivation: Some(Derivation::NoteAverage {
        points: "pointObtenu",
        max_points: "ponderation",
    }),
};

pub static PAIEMENT_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Paiements,
    create_title: "Ajouter un paiement",
    edit_title: "Modifier le paiement",
    fields: &[
        FieldSpec::reference("eleveId", "Élève", ELEVES).required(),
        FieldSpec::choice("trimestre", "Trimestre", TERMS).required(),
        FieldSpec::decimal("montantTotal", "Montant total (€)")
            .required()
            .empty(EmptyPolicy::Zero),
        FieldSpec::decimal("montantPaye", "Montant payé (€)")
            .required()
            .empty(EmptyPolicy::Zero),
    ],
    derivation: Some(Derivation::PaymentRemainder {
        total: "montantTotal",
        paid: "montantPaye",
    }),
};

pub static COMMUNICATION_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Communications,
    create_title: "Nouvelle communication",
    edit_title: "Modifier la communication",
    fields: &[
        FieldSpec::reference("expediteurId", "Expéditeur", USERS).required(),
        FieldSpec::reference("destinataireId", "Destinataire", USERS).required(),
        FieldSpec::choice("type", "Type", COMMUNICATION_TYPES).required(),
        FieldSpec::text("sujet", "Sujet").required(),
        FieldSpec::text("contenu", "Contenu").required(),
    ],
    derivation: None,
};

pub static BULLETIN_FORM: FormSchema = FormSchema {
    resource: ResourceKind::Bulletins,
    create_title: "Créer un bulletin",
    edit_title: "Modifier le bulletin",
    fields: &[
        FieldSpec::reference("eleveId", "Élève", ELEVES).required(),
        FieldSpec::reference("classeId", "Classe", CLASSES).required(),
        FieldSpec::choice("periode", "Période", BULLETIN_PERIODS).required(),
        FieldSpec::decimal("moyenneGenerale", "Moyenne générale"),
        FieldSpec::decimal("pourcentageObtenu", "Pourcentage obtenu (%)"),
        FieldSpec::integer("rangClasse", "Rang dans la classe"),
        FieldSpec::integer("nombreElevesClasse", "Nombre total d'élèves"),
        FieldSpec::text("appreciationGenerale", "Appréciation générale"),
        FieldSpec::text("bulletinPdfPath", "Chemin du fichier PDF"),
    ],
    derivation: None,
};

pub static DETAIL_BULLETIN_FORM: FormSchema = FormSchema {
    resource: ResourceKind::DetailBulletins,
    create_title: "Créer un détail bulletin",
    edit_title: "Modifier le détail bulletin",
    fields: &[
        FieldSpec::reference("bulletinId", "Bulletin", BULLETINS).required(),
        FieldSpec::reference("coursId", "Matière", COURS).required(),
        FieldSpec::reference("noteId", "Note associée", NOTES),
        FieldSpec::decimal("moyenne", "Moyenne de la matière"),
        FieldSpec::decimal("ponderation", "Coefficient de pondération"),
        FieldSpec::decimal("moyennePonderee", "Moyenne pondérée (calculée automatiquement)")
            .read_only()
            .helper("Se calcule automatiquement : moyenne × pondération / 100"),
        FieldSpec::text("appreciationMatiere", "Appréciation de la matière"),
    ],
    derivation: Some(Derivation::Weighted {
        average: "moyenne",
        coefficient: "ponderation",
        target: "moyennePonderee",
    }),
};

pub static PARENT_ELEVE_FORM: FormSchema = FormSchema {
    resource: ResourceKind::ParentEleves,
    create_title: "Ajouter une relation Parent-Élève",
    edit_title: "Modifier la relation",
    fields: &[
        FieldSpec::reference("parentId", "Parent", PARENTS)
            .required()
            .missing("Veuillez sélectionner un parent et un élève"),
        FieldSpec::reference("eleveId", "Élève", ELEVES)
            .required()
            .missing("Veuillez sélectionner un parent et un élève"),
    ],
    derivation: None,
};

pub static ADRESSE_ELEVE_FORM: FormSchema = FormSchema {
    resource: ResourceKind::AdresseEleves,
    create_title: "Ajouter une adresse d'élève",
    edit_title: "Modifier l'adresse",
    fields: &[
        FieldSpec::reference("eleveId", "Élève", ELEVES)
            .required()
            .missing("Veuillez sélectionner un élève"),
        FieldSpec::text("ville", "Ville"),
        FieldSpec::text("code", "Code"),
        FieldSpec::text("communeTerritoire", "Commune/Territoire"),
        FieldSpec::text("ecole", "École"),
    ],
    derivation: None,
};

pub fn schema_for(resource: ResourceKind) -> &'static FormSchema {
    match resource {
        ResourceKind::Users => &USER_FORM,
        ResourceKind::Roles => &ROLE_FORM,
        ResourceKind::Eleves => &ELEVE_FORM,
        ResourceKind::Classes => &CLASSE_FORM,
        ResourceKind::Cours => &COURS_FORM,
        ResourceKind::Notes => &NOTE_FORM,
        ResourceKind::Paiements => &PAIEMENT_FORM,
        ResourceKind::Communications => &COMMUNICATION_FORM,
        ResourceKind::Bulletins => &BULLETIN_FORM,
        ResourceKind::DetailBulletins => &DETAIL_BULLETIN_FORM,
        ResourceKind::ParentEleves => &PARENT_ELEVE_FORM,
        ResourceKind::AdresseEleves => &ADRESSE_ELEVE_FORM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_resource_has_a_matching_schema() {
        for kind in ResourceKind::ALL {
            assert_eq!(schema_for(kind).resource, kind);
            assert!(!schema_for(kind).fields.is_empty());
        }
    }

    #[test]
    fn test_field_names_are_unique() {
        for kind in ResourceKind::ALL {
            let fields = schema_for(kind).fields;
            for (i, field) in fields.iter().enumerate() {
                assert!(
                    fields[i + 1..].iter().all(|other| other.name != field.name),
                    "duplicate field {} in {kind}",
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_derivation_inputs_exist() {
        for kind in ResourceKind::ALL {
            let schema = schema_for(kind);
            if let Some(derivation) = schema.derivation {
                for input in derivation.inputs() {
                    assert!(schema.field(input).is_some(), "{kind}: missing {input}");
                }
            }
        }
    }

    #[test]
    fn test_labels() {
        let eleve = json!({ "nom": "Durant", "prenom": "Pierre" });
        assert_eq!(eleve_label(&eleve), "Durant Pierre - Sans classe");

        let cours = json!({ "nom": "Français", "nomClasse": "CM1-A" });
        assert_eq!(cours_label(&cours), "Français - CM1-A");

        let note = json!({
            "nomEleve": "Leclerc",
            "prenomEleve": "Sophie",
            "nomCours": "Mathématiques",
            "pointObtenu": 14.0,
            "ponderation": 20
        });
        assert_eq!(note_label(&note), "Leclerc Sophie - Mathématiques - 14.0/20");

        assert_eq!(role_label(&json!({ "nomRole": "PARENT" })), "PARENT");
    }
}
