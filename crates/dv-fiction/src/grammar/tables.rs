//! Built-in grammar and hint tables for the "Sector Omega-7" story.

/// Start symbol of the built-in grammar.
pub const START_SYMBOL: &str = "S";

/// Production rules: each nonterminal maps to its alternatives.
pub const RULES: &[(&str, &[&[&str]])] = &[
    (
        "S",
        &[
            &["INTRO", "ESCENARIO", "DETALLE_AMBIENTAL"],
            &["ACCION", "RESULTADO", "REACCION"],
            &["DESCRIPCION", "OPCIONES"],
            &["MOMENTO", "LUGAR", "SENSACION"],
        ],
    ),
    (
        "INTRO",
        &[
            &["Te encuentras"],
            &["De repente te hallas"],
            &["Ahora estás"],
            &["En este momento te sitúas"],
        ],
    ),
    (
        "ESCENARIO",
        &[
            &["en una nave espacial abandonada"],
            &["ante controles alienígenas misteriosos"],
            &["frente a un laboratorio de alta tecnología"],
            &["en una cámara de cuarentena espacial"],
            &["dentro de un túnel de ventilación espacial"],
        ],
    ),
    (
        "DETALLE_AMBIENTAL",
        &[
            &["con luces parpadeantes a lo lejos"],
            &["mientras los sistemas de vida susurran datos"],
            &["con paneles de control brillando en las paredes"],
            &["bajo la luz azul de las pantallas holográficas"],
            &["respirando aire filtrado y estéril"],
        ],
    ),
    (
        "ACCION",
        &[
            &["Decides"],
            &["Eliges"],
            &["Optas por"],
            &["Te dispones a"],
        ],
    ),
    (
        "RESULTADO",
        &[
            &["avanzar con cautela"],
            &["explorar los alrededores"],
            &["examinar los detalles"],
            &["seguir tu instinto"],
        ],
    ),
    (
        "REACCION",
        &[
            &["sintiendo una mezcla de emoción y temor"],
            &["con el corazón latiendo aceleradamente"],
            &["consciente de los peligros que acechan"],
            &["esperando descubrir grandes secretos"],
        ],
    ),
    (
        "DESCRIPCION",
        &[
            &["La atmósfera es"],
            &["El ambiente resulta"],
            &["La situación se presenta"],
            &["Todo parece"],
        ],
    ),
    (
        "OPCIONES",
        &[
            &["llena de posibilidades infinitas"],
            &["cargada de misterio y aventura"],
            &["repleta de desafíos emocionantes"],
            &["abundante en secretos por descubrir"],
        ],
    ),
    (
        "MOMENTO",
        &[
            &["En este instante"],
            &["Justo ahora"],
            &["Precisamente aquí"],
            &["En este preciso momento"],
        ],
    ),
    (
        "LUGAR",
        &[
            &["en el corazón de la nave espacial"],
            &["en los confines del cosmos"],
            &["en el epicentro de la misión"],
            &["en el umbral del descubrimiento alienígena"],
        ],
    ),
    (
        "SENSACION",
        &[
            &["sientes la presencia alienígena"],
            &["percibes la tecnología avanzada"],
            &["experimentas una conexión interestelar"],
            &["vives la emoción de la exploración espacial"],
        ],
    ),
];

/// Atmospheric hints shown under the description of specific states.
pub const HINTS: &[(&str, &[&str])] = &[
    ("inicio", &["Una misión espacial te espera en las profundidades del cosmos..."]),
    ("sala_control", &["Los monitores parpadean con información vital sobre la nave..."]),
    ("sector_laboratorio", &["El aire está cargado con el aroma de experimentos científicos..."]),
    ("bodega_carga", &["El eco de tus pasos resuena en la bodega espacial..."]),
    ("sector_medico", &["La tecnología médica avanzada rodea cada rincón..."]),
    ("muestra_alienigena", &["La muestra alienígena pulsa con vida propia..."]),
    ("contenedor_sospechoso", &["El contenedor emite un resplandor misterioso..."]),
    ("paciente_infectado", &["Los signos vitales del paciente muestran patrones extraños..."]),
    ("comunicacion_alienigena", &["Las ondas telepáticas alienígenas inundan tu mente..."]),
    ("alien_despierto", &["El alienígena te mira con ojos que contienen milenios de sabiduría..."]),
    ("comunicacion_paciente", &["El paciente proyecta imágenes de la amenaza que acecha..."]),
    ("comprension_alienigena", &["Tu mente se expande con el conocimiento alienígena..."]),
    ("alianza_alienigena", &["Una alianza interestelar se forma ante tus ojos..."]),
    ("plan_ataque_nucleo", &["El plan de batalla se desarrolla en tu mente..."]),
    (
        "ataque_final",
        &["El momento de la verdad ha llegado. El destino de la nave está en tus manos..."],
    ),
    ("victoria_tecnologica", &["La tecnología alienígena ha salvado el día..."]),
    ("victoria_humana", &["El espíritu humano ha triunfado sobre la adversidad..."]),
    ("victoria_legendaria", &["Una leyenda interestelar ha nacido..."]),
];

