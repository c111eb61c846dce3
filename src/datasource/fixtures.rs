//! 夹具数据，后端不可用时用于本地开发

use serde_json::{Value, json};

use crate::models::ResourceKind;

pub fn seed(resource: ResourceKind) -> Vec<Value> {
    match resource {
        ResourceKind::Users => users(),
        ResourceKind::Eleves => eleves(),
        ResourceKind::Classes => classes(),
        ResourceKind::Cours => cours(),
        ResourceKind::Notes => notes(),
        ResourceKind::Paiements => paiements(),
        ResourceKind::Communications => communications(),
        ResourceKind::Roles => roles(),
        ResourceKind::Bulletins
        | ResourceKind::ParentEleves
        | ResourceKind::DetailBulletins
        | ResourceKind::AdresseEleves => Vec::new(),
    }
}

fn users() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nom": "Dupont",
            "prenom": "Jean",
            "email": "jean.dupont@example.com",
            "numeroTelephone": "0123456789",
            "adresse": "123 Rue de la Paix, Paris",
            "roles": ["ADMIN"],
            "dateCreation": "2024-01-15T10:30:00"
        }),
        json!({
            "id": 2,
            "nom": "Martin",
            "prenom": "Marie",
            "email": "marie.martin@example.com",
            "numeroTelephone": "0987654321",
            "adresse": "456 Avenue des Champs, Lyon",
            "roles": ["ENSEIGNANT"],
            "dateCreation": "2024-02-20T14:15:00"
        }),
    ]
}

fn eleves() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nom": "Durant",
            "prenom": "Pierre",
            "dateNaissance": "2010-05-15",
            "lieuNaissance": "Paris",
            "numeroPermanent": "2010051501",
            "statutPaiement": "EN_ORDRE",
            "classeId": 1,
            "nomClasse": "CM1-A"
        }),
        json!({
            "id": 2,
            "nom": "Leclerc",
            "prenom": "Sophie",
            "dateNaissance": "2009-08-22",
            "lieuNaissance": "Lyon",
            "numeroPermanent": "2009082201",
            "statutPaiement": "NON_EN_ORDRE",
            "classeId": 1,
            "nomClasse": "CM1-A"
        }),
    ]
}

fn classes() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nomClasse": "CM1-A",
            "anneeScolaire": "2024-2025",
            "enseignantId": 2,
            "nomEnseignant": "Marie Martin",
            "nombreEleves": 25
        }),
        json!({
            "id": 2,
            "nomClasse": "CM2-B",
            "anneeScolaire": "2024-2025",
            "enseignantId": 2,
            "nomEnseignant": "Marie Martin",
            "nombreEleves": 22
        }),
    ]
}

fn cours() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nom": "Mathématiques",
            "ponderation": 2.0,
            "classeId": 1,
            "nomClasse": "CM1-A",
            "enseignantId": 2,
            "nomEnseignant": "Marie Martin"
        }),
        json!({
            "id": 2,
            "nom": "Français",
            "ponderation": 2.0,
            "classeId": 1,
            "nomClasse": "CM1-A",
            "enseignantId": 2,
            "nomEnseignant": "Marie Martin"
        }),
    ]
}

fn notes() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "eleveId": 1,
            "nomEleve": "Durant",
            "prenomEleve": "Pierre",
            "coursId": 1,
            "nomCours": "Mathématiques",
            "periode": "TRIMESTRE_1",
            "pointObtenu": 16.5,
            "ponderation": 20,
            "dateSaisie": "2024-03-15T09:00:00"
        }),
        json!({
            "id": 2,
            "eleveId": 2,
            "nomEleve": "Leclerc",
            "prenomEleve": "Sophie",
            "coursId": 1,
            "nomCours": "Mathématiques",
            "periode": "TRIMESTRE_1",
            "pointObtenu": 14.0,
            "ponderation": 20,
            "dateSaisie": "2024-03-15T09:15:00"
        }),
    ]
}

fn paiements() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "eleveId": 1,
            "nomEleve": "Durant",
            "prenomEleve": "Pierre",
            "montantTotal": 500.0,
            "montantPaye": 500.0,
            "montantRestant": 0.0,
            "trimestre": "TRIMESTRE_1",
            "dateMaj": "2024-02-01T10:00:00"
        }),
        json!({
            "id": 2,
            "eleveId": 2,
            "nomEleve": "Leclerc",
            "prenomEleve": "Sophie",
            "montantTotal": 500.0,
            "montantPaye": 200.0,
            "montantRestant": 300.0,
            "trimestre": "TRIMESTRE_1",
            "dateMaj": "2024-02-15T14:30:00"
        }),
    ]
}

fn communications() -> Vec<Value> {
    vec![json!({
        "id": 1,
        "expediteurId": 2,
        "nomExpediteur": "Marie Martin",
        "destinataireId": 1,
        "nomDestinataire": "Jean Dupont",
        "sujet": "Réunion parents-professeurs",
        "contenu": "Une réunion parents-professeurs aura lieu le 15 avril prochain à 18h30 en salle polyvalente.",
        "type": "INFORMATION",
        "dateEnvoi": "2024-03-20T16:45:00"
    })]
}

fn roles() -> Vec<Value> {
    ["ADMIN", "ENSEIGNANT", "PARENT", "ELEVE"]
        .iter()
        .enumerate()
        .map(|(i, nom)| json!({ "id": i + 1, "nom": nom }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::entities::Classe;
    use crate::models::notes::entities::Note;
    use crate::models::users::entities::User;

    #[test]
    fn test_seed_decodes_into_entities() {
        let users: Vec<User> = seed(ResourceKind::Users)
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
        assert_eq!(users.len(), 2);
        assert!(users[0].has_role("ADMIN"));

        let notes: Vec<Note> = seed(ResourceKind::Notes)
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
        assert_eq!(notes[0].point_obtenu, Some(16.5));
        assert!(notes[0].date_saisie.is_some());

        let classes: Vec<Classe> = seed(ResourceKind::Classes)
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
        assert_eq!(classes[0].nom_classe.as_deref(), Some("CM1-A"));
    }

    #[test]
    fn test_every_seed_has_unique_ids() {
        for kind in ResourceKind::ALL {
            let mut ids: Vec<i64> = seed(kind)
                .iter()
                .filter_map(|v| v.get("id").and_then(Value::as_i64))
                .collect();
            let count = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), count, "duplicate ids in {kind}");
        }
    }
}
