use std::collections::HashMap;

/// Built-in phrasings accepted for each canonical label.
pub const EQUIVALENTS: &[(&str, &[&str])] = &[
    (
        "investigar_nave",
        &["investigar nave", "explorar nave", "examinar nave", "revisar nave"],
    ),
    (
        "buscar_salida",
        &["buscar salida", "encontrar salida", "escapar", "huir"],
    ),
    (
        "laboratorio",
        &["laboratorio", "sector laboratorio", "ir laboratorio", "al laboratorio"],
    ),
    (
        "bodega",
        &["bodega", "bodega de carga", "sector bodega", "ir bodega"],
    ),
    (
        "medico",
        &["médico", "sector médico", "medico", "ir médico", "al médico"],
    ),
    (
        "retroceder",
        &["retroceder", "volver", "regresar", "atrás", "retroceso"],
    ),
    (
        "examinar_muestra",
        &["examinar muestra", "investigar muestra", "analizar muestra", "estudiar muestra"],
    ),
    (
        "leer_diario",
        &["leer diario", "revisar diario", "examinar diario", "estudiar diario"],
    ),
    (
        "buscar_antidoto",
        &["buscar antídoto", "encontrar antídoto", "antídoto", "medicamento"],
    ),
    (
        "investigar_contenedor",
        &["investigar contenedor", "examinar contenedor", "revisar contenedor"],
    ),
    (
        "tomar_traje",
        &["tomar traje", "equipar traje", "poner traje", "traje espacial"],
    ),
    (
        "tomar_arma",
        &["tomar arma", "equipar arma", "arma láser", "arma laser"],
    ),
    (
        "examinar_paciente",
        &["examinar paciente", "revisar paciente", "investigar paciente"],
    ),
    (
        "revisar_ventilacion",
        &["revisar ventilación", "examinar ventilación", "sistema ventilación"],
    ),
    (
        "buscar_medicamentos",
        &["buscar medicamentos", "encontrar medicamentos", "medicamentos"],
    ),
    (
        "comunicarse",
        &["comunicarse", "hablar", "intentar comunicación", "contactar"],
    ),
    (
        "intentar_comunicacion",
        &["intentar comunicación", "comunicarse", "hablar", "contactar"],
    ),
    (
        "despertar_alien",
        &["despertar alien", "despertar alienígena", "activar alien"],
    ),
    (
        "mantener_dormido",
        &["mantener dormido", "dejar dormido", "no despertar"],
    ),
    (
        "analizar_alien",
        &["analizar alien", "estudiar alien", "examinar alien"],
    ),
    (
        "aplicar_tratamiento",
        &["aplicar tratamiento", "tratar paciente", "medicamento"],
    ),
    (
        "aislar_paciente",
        &["aislar paciente", "cuarentena", "aislamiento"],
    ),
    (
        "entender_mensaje",
        &["entender mensaje", "comprender", "interpretar"],
    ),
    (
        "rechazar_vision",
        &["rechazar visión", "ignorar", "rechazar"],
    ),
    (
        "aceptar_ayuda",
        &["aceptar ayuda", "confiar", "aliarse"],
    ),
    (
        "desconfiar",
        &["desconfiar", "no confiar", "rechazar ayuda"],
    ),
    (
        "interrogar",
        &["interrogar", "preguntar", "cuestionar"],
    ),
    (
        "planear_ataque",
        &["planear ataque", "plan ataque", "estrategia"],
    ),
    (
        "buscar_debilidad",
        &["buscar debilidad", "investigar debilidad", "vulnerabilidad"],
    ),
    (
        "evacuar_nave",
        &["evacuar nave", "evacuar", "escapar nave"],
    ),
    (
        "formar_alianza",
        &["formar alianza", "aliarse", "coalición"],
    ),
    (
        "preparar_ataque",
        &["preparar ataque", "prepararse", "organizar"],
    ),
    (
        "ejecutar_plan",
        &["ejecutar plan", "lanzar ataque", "atacar"],
    ),
    (
        "mejorar_plan",
        &["mejorar plan", "optimizar", "perfeccionar"],
    ),
    (
        "usar_tecnologia_alien",
        &["usar tecnología alien", "tecnología alienígena", "arma alien"],
    ),
    (
        "usar_energia_humana",
        &["usar energía humana", "fuerza humana", "voluntad"],
    ),
    (
        "combinar_fuerzas",
        &["combinar fuerzas", "unir fuerzas", "cooperación"],
    ),
    (
        "revisar_datos",
        &["revisar datos", "analizar datos", "examinar datos"],
    ),
    (
        "compartir_informacion",
        &["compartir información", "informar", "comunicar"],
    ),
    (
        "investigar_mas",
        &["investigar más", "profundizar", "más investigación"],
    ),
    (
        "aplicar_conocimiento",
        &["aplicar conocimiento", "usar información", "implementar"],
    ),
    (
        "buscar_vacuna",
        &["buscar vacuna", "desarrollar vacuna", "vacuna"],
    ),
    (
        "probar_antidoto",
        &["probar antídoto", "testear antídoto", "experimentar"],
    ),
    (
        "analizar_composicion",
        &["analizar composición", "estudiar composición", "examinar"],
    ),
    (
        "usar_traje",
        &["usar traje", "equipar traje", "activar protección"],
    ),
    (
        "probar_arma",
        &["probar arma", "testear arma", "disparar"],
    ),
    (
        "usar_ventilacion",
        &["usar ventilación", "acceder ventilación", "sistema"],
    ),
    (
        "aplicar_medicamentos",
        &["aplicar medicamentos", "medicar", "tratar"],
    ),
    (
        "estudiar_seguro",
        &["estudiar seguro", "analizar seguro", "investigar seguro"],
    ),
    (
        "despertar_ahora",
        &["despertar ahora", "activar ahora", "despertar"],
    ),
    (
        "despertar_aliado",
        &["despertar aliado", "activar aliado", "despertar"],
    ),
    (
        "comunicarse_mejorado",
        &["comunicarse mejorado", "hablar mejorado", "contactar"],
    ),
    (
        "monitorear_paciente",
        &["monitorear paciente", "vigilar paciente", "observar"],
    ),
    (
        "aceptar_informacion",
        &["aceptar información", "recibir información", "confiar"],
    ),
    (
        "desarrollar_arma",
        &["desarrollar arma", "crear arma", "construir arma"],
    ),
    (
        "ejecutar_plan_conjunto",
        &["ejecutar plan conjunto", "ataque conjunto", "cooperación"],
    ),
    (
        "lanzar_ataque",
        &["lanzar ataque", "iniciar ataque", "comenzar ataque"],
    ),
    (
        "ejecutar_plan_mejorado",
        &["ejecutar plan mejorado", "plan optimizado", "ataque mejorado"],
    ),
    (
        "ataque_masivo",
        &["ataque masivo", "ofensiva masiva", "ataque conjunto"],
    ),
];

/// Alternative phrasings keyed by canonical label.
///
/// Variants are stored trimmed and lowercased, so they compare directly
/// against normalized input.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceTable {
    variants: HashMap<String, Vec<String>>,
}

impl EquivalenceTable {
    /// Build a table from `(label, variants)` pairs. Blank variants are
    /// dropped.
    pub fn new<I, L, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, Vec<V>)>,
        L: Into<String>,
        V: AsRef<str>,
    {
        let mut variants: HashMap<String, Vec<String>> = HashMap::new();
        for (label, phrasings) in entries {
            let cleaned = phrasings
                .iter()
                .map(|v| v.as_ref().trim().to_lowercase())
                .filter(|v| !v.is_empty());
            variants.entry(label.into()).or_default().extend(cleaned);
        }
        variants.retain(|_, v| !v.is_empty());
        Self { variants }
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        Self::new(EQUIVALENTS.iter().map(|(label, v)| (*label, v.to_vec())))
    }

    /// Normalized variants for `label`, empty when it has no entry.
    pub fn variants(&self, label: &str) -> &[String] {
        self.variants.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of labels with at least one variant.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
