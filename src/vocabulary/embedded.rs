/// Fallback word list used when no vocabulary file can be read
pub const DEFAULT_WORDS: &[&str] = &[
    "sol", "luna", "estrella", "planeta", "cometa", "galaxia", "nube", "lluvia", "viento",
    "trueno", "mar", "rio", "lago", "montana", "volcan", "desierto", "bosque", "selva", "arbol",
    "flor", "hoja", "raiz", "semilla", "fruta", "manzana", "naranja", "platano", "uva", "fresa",
    "gato", "perro", "raton", "caballo", "oveja", "vaca", "tigre", "leon", "elefante", "jirafa",
    "delfin", "ballena", "tortuga", "aguila", "buho", "casa", "puerta", "ventana", "libro",
    "lapiz", "escuela", "camino", "puente", "ciudad", "pueblo", "musica", "guitarra", "piano",
];
