use crate::error::StoryResult;
use crate::graph::StoryGraph;
use crate::state::StoryState;

/// Id of the opening scene.
pub const INITIAL_STATE: &str = "inicio";

/// Build the built-in story graph.
///
/// A number of transitions lead to scenes that have not been written yet
/// (see [`StoryGraph::dangling_transitions`]); following one resets the
/// session to the opening scene.
pub fn omega_seven() -> StoryResult<StoryGraph> {
    StoryGraph::new(
        INITIAL_STATE,
        vec![
            StoryState::new(
                "inicio",
                "Te despiertas en una nave espacial abandonada. Las luces parpadean y el aire es denso. Los monitores muestran que estás en el sector Omega-7, una zona prohibida del espacio. Algo no está bien...",
            )
            .with_transition("investigar_nave", "sala_control")
            .with_transition("buscar_salida", "final_escape_prematuro"),
            StoryState::new(
                "sala_control",
                "Encuentras la sala de control. Los monitores muestran que la nave está en cuarentena por una infección alienígena. Hay tres sectores accesibles: el laboratorio, la bodega de carga y el sector médico.",
            )
            .with_transition("laboratorio", "sector_laboratorio")
            .with_transition("bodega", "bodega_carga")
            .with_transition("medico", "sector_medico")
            .with_transition("revisar_datos", "analisis_datos"),
            StoryState::new(
                "sector_laboratorio",
                "El laboratorio está en caos. Tubos de ensayo rotos, muestras extrañas y un diario científico que menciona \"El Parásito\". En una mesa hay una muestra de tejido alienígena pulsante.",
            )
            .with_transition("examinar_muestra", "muestra_alienigena")
            .with_transition("leer_diario", "informacion_parasito")
            .with_transition("buscar_antidoto", "antidoto_experimental")
            .with_transition("retroceder", "sala_control"),
            StoryState::new(
                "bodega_carga",
                "La bodega está llena de contenedores sellados. Uno de ellos tiene marcas de arañazos por dentro. En una esquina hay un traje espacial intacto y un arma láser.",
            )
            .with_transition("investigar_contenedor", "contenedor_sospechoso")
            .with_transition("tomar_traje", "equipamiento_proteccion")
            .with_transition("tomar_arma", "arma_laser")
            .with_transition("retroceder", "sala_control"),
            StoryState::new(
                "sector_medico",
                "El sector médico está desierto excepto por un paciente en cuarentena. Los signos vitales son estables pero extraños. En la pared hay un mapa del sistema de ventilación.",
            )
            .with_transition("examinar_paciente", "paciente_infectado")
            .with_transition("revisar_ventilacion", "sistema_ventilacion")
            .with_transition("buscar_medicamentos", "medicamentos_especiales")
            .with_transition("retroceder", "sala_control"),
            StoryState::new(
                "muestra_alienigena",
                "La muestra reacciona a tu presencia. Se mueve y emite un sonido agudo. Parece estar viva y estudiándote. ¿Es inteligente?",
            )
            .with_transition("comunicarse", "comunicacion_alienigena")
            .with_transition("destruir_muestra", "destruccion_muestra")
            .with_transition("aislar_muestra", "cuarentena_muestra")
            .with_transition("retroceder", "sector_laboratorio"),
            StoryState::new(
                "contenedor_sospechoso",
                "El contenedor se abre revelando un ser alienígena dormido. Es humanoide pero con características insectoides. Respira lentamente.",
            )
            .with_transition("despertar_alien", "alien_despierto")
            .with_transition("mantener_dormido", "alien_dormido")
            .with_transition("analizar_alien", "analisis_alienigeno")
            .with_transition("retroceder", "bodega_carga"),
            StoryState::new(
                "paciente_infectado",
                "El paciente tiene marcas extrañas en la piel y sus ojos son completamente negros. Habla en un idioma desconocido pero parece reconocerte.",
            )
            .with_transition("intentar_comunicacion", "comunicacion_paciente")
            .with_transition("aplicar_tratamiento", "tratamiento_experimental")
            .with_transition("aislar_paciente", "aislamiento_paciente")
            .with_transition("retroceder", "sector_medico"),
            StoryState::new(
                "comunicacion_alienigena",
                "La muestra responde a tus intentos de comunicación. Proyecta imágenes en tu mente: la nave, otros seres, y una advertencia sobre algo llamado \"El Devorador\".",
            )
            .with_transition("entender_mensaje", "comprension_alienigena")
            .with_transition("rechazar_vision", "rechazo_vision")
            .with_transition("retroceder", "muestra_alienigena"),
            StoryState::new(
                "alien_despierto",
                "El alienígena se despierta y te mira con curiosidad, no con hostilidad. Extiende su mano en un gesto de paz. Parece querer ayudarte.",
            )
            .with_transition("aceptar_ayuda", "alianza_alienigena")
            .with_transition("desconfiar", "desconfianza_alien")
            .with_transition("interrogar", "interrogatorio_alien")
            .with_transition("retroceder", "contenedor_sospechoso"),
            StoryState::new(
                "comunicacion_paciente",
                "El paciente logra comunicarse contigo. Te explica que \"El Devorador\" está en el núcleo de la nave, alimentándose de la energía vital de todos los seres a bordo.",
            )
            .with_transition("planear_ataque", "plan_ataque_nucleo")
            .with_transition("buscar_debilidad", "investigacion_devorador")
            .with_transition("evacuar_nave", "evacuacion_emergencia")
            .with_transition("retroceder", "paciente_infectado"),
            StoryState::new(
                "comprension_alienigena",
                "Entiendes el mensaje. \"El Devorador\" es una entidad parásita que consume la conciencia de sus víctimas. Los alienígenas son refugiados que buscan tu ayuda.",
            )
            .with_transition("formar_alianza", "coalicion_aliados")
            .with_transition("preparar_ataque", "preparacion_final")
            .with_transition("retroceder", "comunicacion_alienigena"),
            StoryState::new(
                "alianza_alienigena",
                "El alienígena te muestra cómo acceder al núcleo de la nave. Juntos forman un plan para enfrentar a \"El Devorador\" usando tecnología alienígena y humana.",
            )
            .with_transition("ejecutar_plan", "ataque_final")
            .with_transition("mejorar_plan", "plan_mejorado")
            .with_transition("retroceder", "alien_despierto"),
            StoryState::new(
                "plan_ataque_nucleo",
                "Con la información del paciente y la ayuda alienígena, desarrollas un plan para infiltrar el núcleo y destruir a \"El Devorador\" desde dentro.",
            )
            .with_transition("ejecutar_plan", "ataque_final")
            .with_transition("buscar_mas_aliados", "reclutamiento_aliados")
            .with_transition("retroceder", "comunicacion_paciente"),
            StoryState::new(
                "ataque_final",
                "Te infiltran en el núcleo de la nave. \"El Devorador\" es una masa amorfa de energía negra que pulsa con vida propia. Es hora de enfrentarlo.",
            )
            .with_transition("usar_tecnologia_alien", "victoria_tecnologia")
            .with_transition("usar_energia_humana", "victoria_humana")
            .with_transition("combinar_fuerzas", "victoria_coalicion"),
            StoryState::new(
                "victoria_tecnologia",
                "Usas la tecnología alienígena para crear un campo de fuerza que neutraliza a \"El Devorador\". La nave se estabiliza y todos los infectados se recuperan.",
            )
            .ending("victoria_tecnologica"),
            StoryState::new(
                "victoria_humana",
                "Tu determinación humana y el poder de tu voluntad logran expulsar a \"El Devorador\" de la nave. La entidad huye al espacio profundo.",
            )
            .ending("victoria_humana"),
            StoryState::new(
                "victoria_coalicion",
                "La unión de tecnología alienígena y espíritu humano crea una fuerza imparable. \"El Devorador\" es destruido completamente. La nave se convierte en un símbolo de cooperación interestelar.",
            )
            .ending("victoria_legendaria"),
            StoryState::new(
                "final_escape_prematuro",
                "Huyes de la nave sin entender la verdadera amenaza. \"El Devorador\" continúa su expansión, condenando a otros sistemas estelares.",
            )
            .ending("derrota_cobarde"),
            StoryState::new(
                "analisis_datos",
                "Los datos revelan que la nave transportaba refugiados alienígenas cuando fue infectada por \"El Devorador\". Los alienígenas no son la amenaza, son las víctimas.",
            )
            .with_transition("compartir_informacion", "sala_control")
            .with_transition("investigar_mas", "investigacion_profunda")
            .with_transition("retroceder", "sala_control"),
            StoryState::new(
                "informacion_parasito",
                "El diario describe a \"El Devorador\" como una entidad de energía pura que consume la conciencia de sus víctimas. Los científicos intentaron contenerlo pero fallaron.",
            )
            .with_transition("aplicar_conocimiento", "estrategia_cientifica")
            .with_transition("buscar_vacuna", "desarrollo_vacuna")
            .with_transition("retroceder", "sector_laboratorio"),
            StoryState::new(
                "antidoto_experimental",
                "Encuentras un vial con un líquido azul brillante. Las etiquetas indican que es un antídoto experimental contra la infección del Devorador.",
            )
            .with_transition("probar_antidoto", "prueba_antidoto")
            .with_transition("analizar_composicion", "analisis_antidoto")
            .with_transition("retroceder", "sector_laboratorio"),
            StoryState::new(
                "equipamiento_proteccion",
                "El traje espacial te proporciona protección contra la infección. También incluye un sistema de comunicación avanzado.",
            )
            .with_transition("usar_traje", "proteccion_activada")
            .with_transition("retroceder", "bodega_carga"),
            StoryState::new(
                "arma_laser",
                "El arma láser está cargada y lista para usar. Puede ser efectiva contra formas de energía como \"El Devorador\".",
            )
            .with_transition("probar_arma", "prueba_arma")
            .with_transition("retroceder", "bodega_carga"),
            StoryState::new(
                "sistema_ventilacion",
                "El mapa muestra que el sistema de ventilación conecta todos los sectores. Podrías usarlo para distribuir un antídoto o para acceder al núcleo.",
            )
            .with_transition("usar_ventilacion", "acceso_ventilacion")
            .with_transition("retroceder", "sector_medico"),
            StoryState::new(
                "medicamentos_especiales",
                "Encuentras medicamentos diseñados específicamente para tratar infecciones alienígenas. Podrían ser cruciales para salvar a los infectados.",
            )
            .with_transition("aplicar_medicamentos", "tratamiento_medicamentos")
            .with_transition("retroceder", "sector_medico"),
            StoryState::new(
                "destruccion_muestra",
                "Destruyes la muestra alienígena. Sin embargo, esto no detiene la amenaza principal. \"El Devorador\" sigue siendo una amenaza.",
            )
            .ending("derrota_destruccion"),
            StoryState::new(
                "cuarentena_muestra",
                "Aíslas la muestra en una cámara de cuarentena. Esto te da tiempo para estudiarla sin riesgo de infección.",
            )
            .with_transition("estudiar_seguro", "estudio_seguro")
            .with_transition("retroceder", "muestra_alienigena"),
            StoryState::new(
                "alien_dormido",
                "Mantienes al alienígena dormido. Es más seguro pero no obtienes su ayuda potencial.",
            )
            .with_transition("despertar_ahora", "alien_despierto")
            .with_transition("retroceder", "contenedor_sospechoso"),
            StoryState::new(
                "analisis_alienigeno",
                "Tu análisis revela que el alienígena no está infectado. Es inmune a \"El Devorador\" y podría ser un aliado valioso.",
            )
            .with_transition("despertar_aliado", "alien_despierto")
            .with_transition("retroceder", "contenedor_sospechoso"),
            StoryState::new(
                "tratamiento_experimental",
                "Aplicas el tratamiento experimental al paciente. Sus signos vitales mejoran gradualmente y recupera la conciencia.",
            )
            .with_transition("comunicarse_mejorado", "comunicacion_paciente")
            .with_transition("retroceder", "paciente_infectado"),
            StoryState::new(
                "aislamiento_paciente",
                "Aíslas al paciente para prevenir la propagación de la infección. Es una medida de seguridad necesaria.",
            )
            .with_transition("monitorear_paciente", "monitoreo_paciente")
            .with_transition("retroceder", "paciente_infectado"),
            StoryState::new(
                "rechazo_vision",
                "Rechazas las visiones alienígenas. Sin embargo, la información podría haber sido valiosa para entender la amenaza.",
            )
            .ending("derrota_ignorancia"),
            StoryState::new(
                "desconfianza_alien",
                "Tu desconfianza hacia el alienígena te hace perder un aliado potencial. La misión se vuelve más difícil.",
            )
            .ending("derrota_desconfianza"),
            StoryState::new(
                "interrogatorio_alien",
                "Interrogas al alienígena. Te proporciona información valiosa sobre \"El Devorador\" y cómo combatirlo.",
            )
            .with_transition("aceptar_informacion", "alianza_alienigena")
            .with_transition("retroceder", "alien_despierto"),
            StoryState::new(
                "investigacion_devorador",
                "Investigas las debilidades de \"El Devorador\". Descubres que es vulnerable a ciertas frecuencias de energía.",
            )
            .with_transition("desarrollar_arma", "desarrollo_arma_especial")
            .with_transition("retroceder", "comunicacion_paciente"),
            StoryState::new(
                "evacuacion_emergencia",
                "Intentas evacuar la nave. Sin embargo, \"El Devorador\" bloquea todas las salidas. La evacuación no es una opción.",
            )
            .ending("derrota_evacuacion"),
            StoryState::new(
                "coalicion_aliados",
                "Formas una coalición entre humanos y alienígenas. Juntos tienen la mejor oportunidad de derrotar a \"El Devorador\".",
            )
            .with_transition("ejecutar_plan_conjunto", "ataque_final")
            .with_transition("retroceder", "comprension_alienigena"),
            StoryState::new(
                "preparacion_final",
                "Te preparas para el ataque final contra \"El Devorador\". Reúnes todos los recursos disponibles.",
            )
            .with_transition("lanzar_ataque", "ataque_final")
            .with_transition("retroceder", "comprension_alienigena"),
            StoryState::new(
                "plan_mejorado",
                "Mejoras el plan con tecnología alienígena avanzada. La probabilidad de éxito aumenta significativamente.",
            )
            .with_transition("ejecutar_plan_mejorado", "ataque_final")
            .with_transition("retroceder", "alianza_alienigena"),
            StoryState::new(
                "reclutamiento_aliados",
                "Reclutas más aliados de entre los alienígenas y humanos sanos. Tu ejército crece.",
            )
            .with_transition("ataque_masivo", "ataque_final")
            .with_transition("retroceder", "plan_ataque_nucleo"),
        ],
    )
}
