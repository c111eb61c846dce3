//! 表单控制器
//!
//! 每个打开的表单持有一份实体草稿。草稿只存在于内存中，
//! 提交成功后即被丢弃，失败时保持原样供用户修改。

pub mod coerce;
pub mod derive;
pub mod options;
pub mod registry;
pub mod schema;
pub mod schemas;

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{EduConnectError, Result};
use crate::grading::GradingSettings;
use crate::models::forms::responses::{FieldView, FormMode, FormView};
use crate::models::{ResourceKind, SelectOption};
use crate::utils::validate::{validate_email, validate_phone};

pub use coerce::Draft;
pub use registry::FormRegistry;
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use schemas::schema_for;

/// 提交所需的全部信息，取出后不再持有表单
#[derive(Debug, Clone)]
pub struct Submission {
    pub resource: ResourceKind,
    pub entity_id: Option<i64>,
    pub payload: Value,
}

impl Submission {
    pub fn is_create(&self) -> bool {
        self.entity_id.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    id: Uuid,
    schema: &'static FormSchema,
    entity_id: Option<i64>,
    draft: Draft,
    options: BTreeMap<&'static str, Vec<SelectOption>>,
    warnings: Vec<String>,
    settings: GradingSettings,
}

impl FormController {
    fn new(schema: &'static FormSchema, entity_id: Option<i64>, draft: Draft, settings: GradingSettings) -> Self {
        let mut form = Self {
            id: Uuid::new_v4(),
            schema,
            entity_id,
            draft,
            options: BTreeMap::new(),
            warnings: Vec::new(),
            settings,
        };
        // 静态下拉选项
        for field in schema.fields {
            if let FieldKind::Choice(choices) = field.kind {
                form.options
                    .insert(field.name, crate::models::common::choices::select_options(choices));
            }
        }
        form
    }

    /// 新建模式：默认值加预填字段
    pub fn open_create(
        schema: &'static FormSchema,
        preset: &BTreeMap<String, String>,
        settings: GradingSettings,
    ) -> Self {
        let draft = schema
            .fields
            .iter()
            .map(|field| (field.name.to_string(), field.default.to_string()))
            .collect();
        let mut form = Self::new(schema, None, draft, settings);
        for (name, value) in preset {
            match schema.field(name) {
                Some(field) if !field.read_only => {
                    form.draft.insert(field.name.to_string(), value.clone());
                }
                _ => debug!("Ignoring preset field {} for {}", name, schema.resource),
            }
        }
        form.recompute();
        form
    }

    /// 编辑模式：草稿复制自后端记录
    pub fn open_edit(
        schema: &'static FormSchema,
        id: i64,
        record: &Value,
        settings: GradingSettings,
    ) -> Self {
        let draft = coerce::draft_from_record(schema, record);
        Self::new(schema, Some(id), draft, settings)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn resource(&self) -> ResourceKind {
        self.schema.resource
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn is_creating(&self) -> bool {
        self.entity_id.is_none()
    }

    pub fn mode(&self) -> FormMode {
        if self.is_creating() {
            FormMode::Create
        } else {
            FormMode::Edit
        }
    }

    pub fn entity_id(&self) -> Option<i64> {
        self.entity_id
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn value(&self, name: &str) -> &str {
        self.draft.get(name).map(String::as_str).unwrap_or_default()
    }

    fn recompute(&mut self) {
        if let Some(derivation) = &self.schema.derivation {
            derive::apply(derivation, &mut self.draft, &self.settings);
        }
    }

    fn editable(&self, name: &str) -> Result<&'static FieldSpec> {
        let field = self.schema.field(name).ok_or_else(|| {
            EduConnectError::validation(format!("Champ inconnu : {name}"))
        })?;
        if field.read_only {
            return Err(EduConnectError::validation(format!(
                "Le champ {} est calculé automatiquement",
                field.label
            )));
        }
        Ok(field)
    }

    /// 修改单个字段并重新计算派生字段
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = self.editable(name)?;
        self.draft.insert(field.name.to_string(), value.into());
        let is_input = self
            .schema
            .derivation
            .is_some_and(|derivation| derivation.inputs().contains(&field.name));
        if is_input {
            self.recompute();
        }
        Ok(())
    }

    /// 批量修改，任一字段不可编辑时整体拒绝
    pub fn set_fields(&mut self, fields: &BTreeMap<String, String>) -> Result<()> {
        for name in fields.keys() {
            self.editable(name)?;
        }
        for (name, value) in fields {
            self.set_field(name, value.clone())?;
        }
        Ok(())
    }

    /// 只检查必填字段是否存在，返回第一个缺失字段的提示
    pub fn validate(&self) -> Result<()> {
        let creating = self.is_creating();
        let missing = self
            .schema
            .fields
            .iter()
            .find(|field| field.is_required(creating) && self.value(field.name).trim().is_empty());
        match missing {
            Some(field) => Err(EduConnectError::validation(
                field.missing_message.unwrap_or(FormSchema::REQUIRED_MESSAGE),
            )),
            None => Ok(()),
        }
    }

    /// 草稿转为后端请求体
    pub fn payload(&self) -> Result<Value> {
        coerce::payload(self.schema, &self.draft, self.is_creating())
    }

    /// 校验并生成提交内容
    pub fn submission(&self) -> Result<Submission> {
        self.validate()?;
        Ok(Submission {
            resource: self.resource(),
            entity_id: self.entity_id,
            payload: self.payload()?,
        })
    }

    pub fn set_options(&mut self, field: &'static str, options: Vec<SelectOption>) {
        self.options.insert(field, options);
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        let warning = warning.into();
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// 非阻塞的格式提示
    pub fn hints(&self) -> Vec<String> {
        self.schema
            .fields
            .iter()
            .filter_map(|field| {
                let value = self.value(field.name).trim();
                if value.is_empty() {
                    return None;
                }
                let check = match field.hint? {
                    schema::Hint::Email => validate_email(value),
                    schema::Hint::Phone => validate_phone(value),
                };
                check.err().map(|message| format!("{} : {}", field.label, message))
            })
            .collect()
    }

    pub fn view(&self) -> FormView {
        let creating = self.is_creating();
        let fields = self
            .schema
            .fields
            .iter()
            .map(|field| FieldView {
                name: field.name.to_string(),
                label: field.label.to_string(),
                kind: field.kind.name().to_string(),
                required: field.is_required(creating),
                read_only: field.read_only,
                value: self.value(field.name).to_string(),
                options: self.options.get(field.name).cloned().unwrap_or_default(),
                helper: field
                    .helper
                    .filter(|_| !(creating && matches!(field.kind, FieldKind::Secret)))
                    .map(str::to_string),
            })
            .collect();

        let mut warnings = self.warnings.clone();
        warnings.extend(self.hints());

        FormView {
            form_id: self.id,
            resource: self.resource(),
            mode: self.mode(),
            entity_id: self.entity_id,
            title: self.schema.title(creating).to_string(),
            fields,
            preview: self
                .schema
                .derivation
                .and_then(|derivation| derive::preview(&derivation, &self.draft, &self.settings)),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schemas::{DETAIL_BULLETIN_FORM, ELEVE_FORM, NOTE_FORM, USER_FORM};
    use serde_json::json;

    fn settings() -> GradingSettings {
        GradingSettings::default()
    }

    #[test]
    fn test_create_uses_defaults_and_preset() {
        let preset = BTreeMap::from([("classeId".to_string(), "2".to_string())]);
        let form = FormController::open_create(&ELEVE_FORM, &preset, settings());
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.value("statutPaiement"), "NON_EN_ORDRE");
        assert_eq!(form.value("classeId"), "2");
        assert_eq!(form.value("nom"), "");
    }

    #[test]
    fn test_preset_cannot_set_read_only_field() {
        let preset = BTreeMap::from([
            ("moyennePonderee".to_string(), "9.99".to_string()),
            ("moyenne".to_string(), "15".to_string()),
            ("ponderation".to_string(), "3".to_string()),
        ]);
        let form = FormController::open_create(&DETAIL_BULLETIN_FORM, &preset, settings());
        assert_eq!(form.value("moyennePonderee"), "0.45");
    }

    #[test]
    fn test_derived_field_tracks_every_edit() {
        let mut form = FormController::open_create(&DETAIL_BULLETIN_FORM, &BTreeMap::new(), settings());
        form.set_field("moyenne", "1").unwrap();
        assert_eq!(form.value("moyennePonderee"), "");
        form.set_field("ponderation", "4").unwrap();
        assert_eq!(form.value("moyennePonderee"), "0.04");
        form.set_field("moyenne", "15").unwrap();
        assert_eq!(form.value("moyennePonderee"), "0.60");
        form.set_field("moyenne", "15.").unwrap();
        assert_eq!(form.value("moyennePonderee"), "0.60");
        form.set_field("ponderation", "").unwrap();
        assert_eq!(form.value("moyennePonderee"), "");
    }

    #[test]
    fn test_read_only_and_unknown_fields_rejected() {
        let mut form = FormController::open_create(&DETAIL_BULLETIN_FORM, &BTreeMap::new(), settings());
        assert!(matches!(
            form.set_field("moyennePonderee", "5"),
            Err(EduConnectError::Validation(_))
        ));
        assert!(form.set_field("inconnu", "5").is_err());

        // 批量修改整体拒绝
        let fields = BTreeMap::from([
            ("moyenne".to_string(), "12".to_string()),
            ("moyennePonderee".to_string(), "5".to_string()),
        ]);
        assert!(form.set_fields(&fields).is_err());
        assert_eq!(form.value("moyenne"), "");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = FormController::open_create(&USER_FORM, &BTreeMap::new(), settings());
        form.set_field("nom", "Dupont").unwrap();
        form.set_field("prenom", "Jean").unwrap();
        form.set_field("email", "jean@example.com").unwrap();
        form.set_field("motDePasse", "secret").unwrap();
        let err = form.validate().unwrap_err();
        assert_eq!(err.message(), "Veuillez sélectionner un rôle");

        form.set_field("role", "ADMIN").unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = FormController::open_create(&NOTE_FORM, &BTreeMap::new(), settings());
        for (name, value) in [
            ("eleveId", "1"),
            ("coursId", "1"),
            ("periode", "TRIMESTRE_1"),
            ("pointObtenu", "14"),
            ("ponderation", "   "),
        ] {
            form.set_field(name, value).unwrap();
        }
        assert_eq!(
            form.validate().unwrap_err().message(),
            "Veuillez remplir les champs obligatoires"
        );
    }

    #[test]
    fn test_password_required_only_on_create() {
        let record = json!({
            "id": 1,
            "nom": "Dupont",
            "prenom": "Jean",
            "email": "jean.dupont@example.com",
            "roles": ["ADMIN"]
        });
        let form = FormController::open_edit(&USER_FORM, 1, &record, settings());
        assert_eq!(form.mode(), FormMode::Edit);
        assert!(form.validate().is_ok());
        let submission = form.submission().unwrap();
        assert_eq!(submission.entity_id, Some(1));
        assert!(submission.payload.get("motDePasse").is_none());

        let view = form.view();
        let password = view.fields.iter().find(|f| f.name == "motDePasse").unwrap();
        assert!(!password.required);
        assert!(password.helper.is_some());
    }

    #[test]
    fn test_view_contains_preview_and_hints() {
        let mut form = FormController::open_create(&NOTE_FORM, &BTreeMap::new(), settings());
        form.set_field("pointObtenu", "7").unwrap();
        form.set_field("ponderation", "10").unwrap();
        let view = form.view();
        let preview = view.preview.unwrap();
        assert_eq!(preview.display, "14.00/20");
        let periode = view.fields.iter().find(|f| f.name == "periode").unwrap();
        assert_eq!(periode.options.len(), 5);

        let mut user = FormController::open_create(&USER_FORM, &BTreeMap::new(), settings());
        user.set_field("email", "pas-un-email").unwrap();
        user.set_field("telephone", "0123456789").unwrap();
        let warnings = user.view().warnings;
        assert_eq!(warnings, vec!["Email : Adresse e-mail invalide".to_string()]);
    }

    #[test]
    fn test_edit_resubmits_backend_record_unchanged() {
        let record = json!({
            "id": 7,
            "nom": "Durant",
            "prenom": "Pierre",
            "dateNaissance": "2010-05-15T00:00:00+01:00",
            "lieuNaissance": "Lyon",
            "numeroPermanent": "P-7",
            "statutPaiement": "EN_ORDRE",
            "classeId": 9007199254740993_i64
        });
        let form = FormController::open_edit(&ELEVE_FORM, 7, &record, settings());
        assert_eq!(form.value("dateNaissance"), "2010-05-15");
        assert_eq!(form.value("classeId"), "9007199254740993");

        let submission = form.submission().unwrap();
        assert_eq!(submission.entity_id, Some(7));
        assert_eq!(submission.payload["dateNaissance"], json!("2010-05-15"));
        assert_eq!(submission.payload["classeId"], json!(9007199254740993_i64));

        let utc = json!({ "nom": "Durant", "prenom": "Pierre", "dateNaissance": "2010-05-15T00:00:00Z" });
        let form = FormController::open_edit(&ELEVE_FORM, 7, &utc, settings());
        assert!(form.submission().is_ok());
    }

    #[test]
    fn test_warnings_are_deduplicated() {
        let mut form = FormController::open_create(&NOTE_FORM, &BTreeMap::new(), settings());
        form.add_warning("Erreur lors du chargement des élèves");
        form.add_warning("Erreur lors du chargement des élèves");
        assert_eq!(form.view().warnings.len(), 1);
    }
}
